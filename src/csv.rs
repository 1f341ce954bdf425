// src/csv.rs
use std::io::{self, Write};

/// UTF-8 byte-order mark; spreadsheet apps use it to pick the encoding.
pub const BOM: &str = "\u{feff}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quote {
    /// Quote only fields containing the separator, a quote or a line break.
    Needed,
    /// Quote every field.
    All,
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer. Rows end with `\n`.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char, quote: Quote) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if quote == Quote::All || needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify a table as-is (no BOM), e.g. for a console preview.
pub fn rows_to_string(headers: &Option<Vec<String>>, rows: &[Vec<String>], sep: char, quote: Quote) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep, quote);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep, quote);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
