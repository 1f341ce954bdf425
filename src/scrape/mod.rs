// src/scrape/mod.rs
mod pages;
mod scrape;

pub use pages::{crawl_reviews, page_url};
pub use scrape::{crawl_many, crawl_many_with, CrawlReport, TargetOutcome};
