// src/lib.rs

#[macro_use]
pub mod macros;

pub mod error;
pub mod log;
pub mod config;
pub mod core;
pub mod record;
pub mod specs;
pub mod scrape;
pub mod clean;

pub mod csv;
pub mod store;
pub mod file;
pub mod progress;
pub mod runner;
pub mod cli;

pub use error::{Result, ScrapeError};
pub use record::{CanonicalReview, RawReview};
