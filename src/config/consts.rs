// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const REFERER: &str = "https://www.foody.vn/";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Listing page selectors
pub const SEL_REVIEW_ITEM: &str = ".review-item";
pub const SEL_AUTHOR: &str = ".ru-username";
pub const SEL_RATING: &str = ".review-points";
pub const SEL_DATE: &str = ".ru-time";
pub const SEL_TEXT: &str = ".review-des";
pub const SEL_TITLE: &str = "title";

/// Unrendered template marker; rows carrying it in author/rating are skipped.
pub const PLACEHOLDER_MARK: &str = "{{";

// Crawl
pub const DEFAULT_MAX_PAGES: u32 = 5;
pub const DEFAULT_DELAY_SECS: (f64, f64) = (2.0, 5.0); // be polite

pub const SAMPLE_TARGET: &str = "https://www.foody.vn/ho-chi-minh/quan-an-hue-o-xuan-2/binh-luan";

// Clean
pub const MIN_TEXT_CHARS: usize = 8;

// Export
pub const DEFAULT_OUT_FILE: &str = "foody_reviews_multi.csv";
pub const REVIEW_HEADERS: [&str; 6] = ["review_id", "place_name", "author", "rating", "date", "text"];
