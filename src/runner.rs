// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    clean::clean_reviews,
    config::options::AppOptions,
    core::net::{Fetch, Session},
    error::Result,
    file::write_reviews_csv,
    progress::Progress,
    record::CanonicalReview,
    scrape::crawl_many_with,
    store::DataSet,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub raw: usize,
    pub reviews: Vec<CanonicalReview>,
    /// `None` when nothing was collected and no file was written.
    pub written: Option<PathBuf>,
    pub failed_targets: Vec<String>,
}

impl RunSummary {
    pub fn clean(&self) -> usize { self.reviews.len() }
}

/// Crawl every target, clean, and write the CSV.
pub fn run(options: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let session = Session::new()?;
    run_with(&session, options, progress)
}

/// [`run`] over any page source.
pub fn run_with(
    fetcher: &dyn Fetch,
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let report = crawl_many_with(
        fetcher,
        &options.targets,
        &options.crawl,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    );
    let failed_targets: Vec<String> = report.failures().map(|(url, _)| s!(url)).collect();

    let raw = report.into_records();
    let raw_count = raw.len();
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Raw collected: {raw_count}"));
    }

    if raw.is_empty() {
        info!(failed = failed_targets.len(), "nothing collected, no file written");
        if let Some(p) = progress.as_deref_mut() {
            p.log("No reviews collected. Check URL/selectors or the site may be blocking.");
        }
        return Ok(RunSummary { raw: 0, reviews: Vec::new(), written: None, failed_targets });
    }

    let reviews = clean_reviews(raw);
    let data = DataSet::from_reviews(&reviews);
    let path = write_reviews_csv(options.export.out_path(), &data)?;

    info!(raw = raw_count, clean = reviews.len(), path = %path.display(), "run complete");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Raw: {} -> Clean: {} reviews (removed duplicates/cleaned)",
            raw_count,
            reviews.len()
        ));
    }

    Ok(RunSummary { raw: raw_count, reviews, written: Some(path), failed_targets })
}
