// src/store.rs
use crate::config::consts::REVIEW_HEADERS;
use crate::record::CanonicalReview;

/// Plain string table: what gets written out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// `review_id,place_name,author,rating,date,text`; nulls become empty cells.
    pub fn from_reviews(reviews: &[CanonicalReview]) -> Self {
        let headers = REVIEW_HEADERS.iter().map(|h| s!(*h)).collect();
        let rows = reviews
            .iter()
            .map(|r| {
                row![
                    r.review_id,
                    r.place_name,
                    r.author,
                    r.rating.map(fmt_rating).unwrap_or_default(),
                    r.date.as_deref().unwrap_or_default(),
                    r.text,
                ]
            })
            .collect();
        Self { headers: Some(headers), rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Shortest round-trip form with at least one fractional digit: `9.0`, `4.5`.
/// Magnitudes from `1e16` up and below `1e-4` switch to exponent form with a
/// signed two-digit exponent (`1.2345678901234567e+19`, `1e-05`).
fn fmt_rating(v: f64) -> String {
    if v.is_nan() {
        return s!("nan");
    }
    if v.is_infinite() {
        return s!(if v > 0.0 { "inf" } else { "-inf" });
    }
    if v == 0.0 {
        return s!(if v.is_sign_negative() { "-0.0" } else { "0.0" });
    }

    let sci = format!("{v:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exp) {
        let plain = v.to_string();
        if plain.contains('.') { plain } else { format!("{plain}.0") }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}
