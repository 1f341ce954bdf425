// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("decimal digit regex"));

/// Collapse every whitespace run (spaces, tabs, newlines, NBSP…) into one
/// space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Text before the first `|`, trimmed; the whole string trimmed if there is none.
/// `"Quán Ăn Huế | Foody.vn"` → `"Quán Ăn Huế"`
pub fn before_pipe(s: &str) -> String {
    match s.split_once('|') {
        Some((head, _)) => head.trim().to_string(),
        None => s.trim().to_string(),
    }
}

/// Null markers a text cell may carry after a lossy round-trip.
pub fn is_null_marker(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("nan") || s.eq_ignore_ascii_case("none")
}

fn is_decimal(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_RE.is_match(c.encode_utf8(&mut buf))
}

/// Value of any Unicode decimal digit (`'7'`, `'٧'`, `'７'` → 7).
/// Decimal digits come in contiguous runs of ten starting at zero, so the
/// value is the offset from the start of the run, modulo ten.
pub fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Rewrite every decimal digit as its ASCII form; other chars are kept.
/// `"٤,٥"` → `"4,5"`
pub fn fold_digits(s: &str) -> String {
    s.chars()
        .map(|c| digit_value(c).and_then(|d| char::from_digit(d, 10)).unwrap_or(c))
        .collect()
}
