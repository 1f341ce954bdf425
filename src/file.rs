// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::csv::{write_row, Quote, BOM};
use crate::error::{Result, ScrapeError};
use crate::store::DataSet;

/// Write the review table: UTF-8 with BOM, every field quoted, `\n` endings.
/// Creates missing parent directories; truncates an existing file.
/// Returns the path written to.
pub fn write_reviews_csv(path: &Path, data: &DataSet) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    out.write_all(BOM.as_bytes())?;
    if let Some(h) = &data.headers {
        write_row(&mut out, h, ',', Quote::All)?;
    }
    for row in &data.rows {
        write_row(&mut out, row, ',', Quote::All)?;
    }
    out.flush()?;

    info!(path = %path.display(), rows = data.len(), "csv written");
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::InvalidOptions(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
