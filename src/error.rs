// src/error.rs
use std::io;

use thiserror::Error;

/// Everything that can go wrong below the CLI.
///
/// Non-200 pages are not errors (they end pagination) and unparseable
/// ratings/dates are not errors either (they become `None`).
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
