// src/record.rs

/// One review as it appears in the listing HTML. Every field is the trimmed
/// element text, or empty when the element was missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawReview {
    pub place_name: String,
    pub author: String,
    pub rating: String,
    pub date: String,
    pub text: String,
}

/// A cleaned, typed, deduplicated review, ready for export.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalReview {
    /// 1-based, contiguous, in row order.
    pub review_id: u32,
    pub place_name: String,
    pub author: String,
    pub rating: Option<f64>,
    /// `YYYY-MM-DD` when the source had a `D/M/YYYY` date, else the source text.
    pub date: Option<String>,
    pub text: String,
}
