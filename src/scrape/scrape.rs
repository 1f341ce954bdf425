// src/scrape/scrape.rs
use tracing::{info, warn};

use crate::{
    config::options::CrawlOptions,
    core::net::{Fetch, Session},
    error::{Result, ScrapeError},
    progress::Progress,
    record::RawReview,
};

use super::pages::crawl_reviews;

/// What happened to one base URL.
#[derive(Debug)]
pub struct TargetOutcome {
    pub url: String,
    pub result: Result<Vec<RawReview>>,
}

/// Per-target outcomes, in input order.
#[derive(Debug, Default)]
pub struct CrawlReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl CrawlReport {
    /// Records of all successful targets, URL order then page order.
    pub fn records(&self) -> impl Iterator<Item = &RawReview> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .flatten()
    }

    pub fn into_records(self) -> Vec<RawReview> {
        self.outcomes
            .into_iter()
            .filter_map(|o| o.result.ok())
            .flatten()
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &ScrapeError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.url.as_str(), e)))
    }

    pub fn raw_count(&self) -> usize {
        self.records().count()
    }
}

/// Crawl every target over one shared session (connections + cookies + headers).
pub fn crawl_many<S: AsRef<str>>(
    urls: &[S],
    opts: &CrawlOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<CrawlReport> {
    let session = Session::new()?;
    Ok(crawl_many_with(&session, urls, opts, progress))
}

/// Same as [`crawl_many`] over any page source. A failing target is recorded
/// and skipped; it never stops the run.
pub fn crawl_many_with<S: AsRef<str>>(
    fetcher: &dyn Fetch,
    urls: &[S],
    opts: &CrawlOptions,
    mut progress: Option<&mut dyn Progress>,
) -> CrawlReport {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    let mut outcomes = Vec::with_capacity(urls.len());

    for url in urls {
        let url = url.as_ref();
        info!(%url, max_pages = opts.max_pages_each, "crawling");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Crawling: {} (max_pages={})", url, opts.max_pages_each));
        }

        let result = crawl_reviews(
            url,
            opts.max_pages_each,
            fetcher,
            opts.delay,
            progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
        );

        match &result {
            Ok(reviews) => {
                info!(%url, reviews = reviews.len(), "target done");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(url, reviews.len());
                }
            }
            Err(e) => {
                warn!(%url, error = %e, "target failed, skipping");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(url, &e.to_string());
                }
            }
        }

        outcomes.push(TargetOutcome { url: s!(url), result });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    CrawlReport { outcomes }
}
