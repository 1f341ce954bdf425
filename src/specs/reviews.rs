// src/specs/reviews.rs
//
// Review listing page (`…/binh-luan?page=N`).
//
// Shape:
//   <title>Place name | Foody.vn</title>
//   <li class="review-item">
//     <a class="ru-username">Author</a>
//     <div class="review-points">8.4</div>
//     <span class="ru-time">5/3/2023 12:00</span>
//     <div class="review-des">Body text…</div>
//   </li>
//
// Listings that come back without the client-side template rendered carry
// `{{…}}` placeholders instead of values; those items are skipped.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;
use crate::core::html::{document_text, select_text, selector};
use crate::core::sanitize::before_pipe;
use crate::record::RawReview;

struct ReviewSelectors {
    item: Selector,
    author: Selector,
    rating: Selector,
    date: Selector,
    text: Selector,
    title: Selector,
}

static SEL: LazyLock<ReviewSelectors> = LazyLock::new(|| ReviewSelectors {
    item: selector(SEL_REVIEW_ITEM),
    author: selector(SEL_AUTHOR),
    rating: selector(SEL_RATING),
    date: selector(SEL_DATE),
    text: selector(SEL_TEXT),
    title: selector(SEL_TITLE),
});

/// Parse a page body and extract its reviews.
pub fn parse_reviews(html: &str) -> Vec<RawReview> {
    extract_reviews(&Html::parse_document(html))
}

/// All review items of one listing page, in DOM order.
pub fn extract_reviews(doc: &Html) -> Vec<RawReview> {
    let place_name = place_name(doc);

    doc.select(&SEL.item)
        .filter_map(|item| read_item(item, &place_name))
        .collect()
}

/// Place name from `<title>`: the part before the first `|`, trimmed.
pub fn place_name(doc: &Html) -> String {
    document_text(doc, &SEL.title)
        .map(|t| before_pipe(&t))
        .unwrap_or_default()
}

fn read_item(item: ElementRef<'_>, place_name: &str) -> Option<RawReview> {
    let author: Option<String> = select_text(item, &SEL.author);
    let rating: Option<String> = select_text(item, &SEL.rating);
    let date: Option<String> = select_text(item, &SEL.date);
    let text: Option<String> = select_text(item, &SEL.text);

    // Missing sub-elements read as empty fields.
    let author = author.unwrap_or_default();
    let rating = rating.unwrap_or_default();

    if is_placeholder(&author) || is_placeholder(&rating) {
        return None;
    }

    Some(RawReview {
        place_name: s!(place_name),
        author,
        rating,
        date: date.unwrap_or_default(),
        text: text.unwrap_or_default(),
    })
}

fn is_placeholder(field: &str) -> bool {
    field.contains(PLACEHOLDER_MARK)
}
