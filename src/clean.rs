// src/clean.rs
//
// Raw reviews → canonical table. Step order matters: the length filter runs on
// collapsed text, and dedup runs on cleaned values.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::consts::MIN_TEXT_CHARS;
use crate::core::sanitize::{fold_digits, is_null_marker, normalize_ws};
use crate::record::{CanonicalReview, RawReview};

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)").expect("rating regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").expect("date regex"));

/// Trim, collapse, filter, coerce, dedup on `(place_name, text)` and number
/// the survivors from 1.
pub fn clean_reviews(raw: Vec<RawReview>) -> Vec<CanonicalReview> {
    let total = raw.len();
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(total);
    let mut out = Vec::with_capacity(total);
    let mut short = 0usize;

    for r in raw {
        let place_name = r.place_name.trim().to_string();
        let author = r.author.trim().to_string();
        let date = r.date.trim().to_string();
        let text = normalize_ws(&r.text);

        if text.chars().count() < MIN_TEXT_CHARS {
            short += 1;
            continue;
        }

        let rating = parse_rating(&r.rating);
        let date = normalize_date(&date);

        if !seen.insert((place_name.clone(), text.clone())) {
            continue;
        }

        out.push(CanonicalReview {
            review_id: 0,
            place_name,
            author,
            rating,
            date,
            text,
        });
    }

    for (i, review) in out.iter_mut().enumerate() {
        review.review_id = i as u32 + 1;
    }

    debug!(total, short, duplicates = total - short - out.len(), kept = out.len(), "cleaned");
    out
}

/// First number in the string, in any script's digits; `,` accepted as
/// decimal separator.
/// `"4,5 điểm"` → `4.5`, `"no rating"` → `None`.
pub fn parse_rating(s: &str) -> Option<f64> {
    let m = RATING_RE.find(s)?;
    fold_digits(m.as_str()).replace(',', ".").parse().ok()
}

/// `D/M/YYYY` anywhere in the string → `YYYY-MM-DD`. Anything else is kept
/// verbatim unless it is a null marker (`""`, `nan`, `none`).
pub fn normalize_date(s: &str) -> Option<String> {
    if let Some(c) = DATE_RE.captures(s) {
        let day: u32 = fold_digits(&c[1]).parse().ok()?;
        let month: u32 = fold_digits(&c[2]).parse().ok()?;
        let year: u32 = fold_digits(&c[3]).parse().ok()?;
        return Some(format!("{year:04}-{month:02}-{day:02}"));
    }
    if is_null_marker(s) { None } else { Some(s!(s)) }
}
