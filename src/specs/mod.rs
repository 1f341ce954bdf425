// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction: *where the ground truth lives in the HTML* and
//! *how to read it robustly*. Everything here is a pure function of a parsed
//! document; no network, no sleeping, no files.
//!
//! ## What does **not** live here
//! - **Pagination, delays, multi-target loops** – `scrape`.
//! - **Type coercion, dedup, ids** – `clean`.
//! - **CSV shaping** – `store` / `csv` / `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::crawl_many → scrape::crawl_reviews (per URL)
//!                                  ↘ specs::reviews::extract_reviews (per page)
//! ```
//!
//! ## Conventions & invariants
//! - A missing sub-element is an empty field, never an error.
//! - Output order is DOM order.
//! - Specs should be testable **offline** against captured fixtures.
pub mod reviews;
