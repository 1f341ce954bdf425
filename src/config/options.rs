// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    /// Base listing URLs, crawled in this order.
    pub targets: Vec<String>,
    pub crawl: CrawlOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            targets: vec![s!(SAMPLE_TARGET)],
            crawl: CrawlOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrawlOptions {
    pub max_pages_each: u32,
    pub delay: DelayRange,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_pages_each: DEFAULT_MAX_PAGES,
            delay: DelayRange::default(),
        }
    }
}

/// Inclusive range of seconds to pause between two pages of the same target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayRange {
    min: f64,
    max: f64,
}

impl DelayRange {
    /// Bounds in seconds. Reversed bounds are swapped; negative or
    /// non-finite bounds are rejected.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 {
            return Err(ScrapeError::InvalidOptions(format!(
                "delay bounds must be finite and non-negative, got {min}..{max}"
            )));
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Ok(Self { min, max })
    }

    /// No pause at all. Handy for tests and local fixtures.
    pub const fn none() -> Self {
        Self { min: 0.0, max: 0.0 }
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }

    /// Uniform draw from `[min, max]`.
    pub fn sample(&self) -> Duration {
        let secs = self.min + fastrand::f64() * (self.max - self.min);
        Duration::from_secs_f64(secs)
    }

    /// Parse `"2-4"`, `"2.5-4"` or a single value `"3"` (fixed delay).
    pub fn parse(s: &str) -> Result<Self> {
        let bad = || ScrapeError::InvalidOptions(format!("invalid delay range: {s}"));
        let (a, b) = match s.split_once('-') {
            Some((a, b)) => (a, b),
            None => (s, s),
        };
        let min: f64 = a.trim().parse().map_err(|_| bad())?;
        let max: f64 = b.trim().parse().map_err(|_| bad())?;
        Self::new(min, max)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        let (min, max) = DEFAULT_DELAY_SECS;
        Self { min, max }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_FILE) }
    }
}

impl ExportOptions {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let mut opts = Self::default();
        opts.set_path(path);
        opts
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// A directory-looking path (trailing separator or existing dir) gets the
    /// default file name appended.
    pub fn set_path(&mut self, path: impl AsRef<Path>) {
        let p = path.as_ref();
        self.out_path = if p.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_OUT_FILE)
        } else if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            p.join(DEFAULT_OUT_FILE)
        } else {
            p.to_path_buf()
        };
    }
}
