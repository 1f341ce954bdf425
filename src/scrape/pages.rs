// src/scrape/pages.rs
//
// Paginated fetch of one listing: page=1..=max_pages, stop at the first non-200.

use std::thread;

use scraper::Html;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::options::DelayRange,
    core::net::Fetch,
    error::Result,
    progress::Progress,
    record::RawReview,
    specs::reviews::extract_reviews,
};

/// `base` + `?page=n`, or `&page=n` when `base` already has a query.
pub fn page_url(base: &str, page: u32) -> String {
    let sep = if has_query(base) { "&" } else { "?" };
    join!(base, sep, "page=", &page.to_string())
}

fn has_query(base: &str) -> bool {
    match Url::parse(base) {
        Ok(u) => u.query().is_some_and(|q| !q.is_empty()),
        // Relative or otherwise unparseable: look at the raw text.
        Err(_) => base
            .split_once('?')
            .map(|(_, rest)| rest.split('#').next().unwrap_or(""))
            .is_some_and(|q| !q.is_empty()),
    }
}

/// Crawl up to `max_pages` pages of one listing and return every review found.
///
/// A non-200 page ends the loop normally with what was gathered so far.
/// Transport errors propagate; the caller decides what a failed target means.
pub fn crawl_reviews(
    base_url: &str,
    max_pages: u32,
    fetcher: &dyn Fetch,
    delay: DelayRange,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<RawReview>> {
    let mut reviews = Vec::new();

    for page in 1..=max_pages {
        let url = page_url(base_url, page);
        let resp = fetcher.get(&url)?;

        if !resp.is_ok() {
            warn!(%url, status = resp.status, "non-200 page, stopping pagination");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error: {} {}", resp.status, url));
            }
            break;
        }

        let doc = Html::parse_document(&resp.body);
        let found = extract_reviews(&doc);
        debug!(%url, page, found = found.len(), "page parsed");
        reviews.extend(found);

        if page < max_pages {
            thread::sleep(delay.sample()); // be polite
        }
    }

    Ok(reviews)
}
