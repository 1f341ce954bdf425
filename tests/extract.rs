// tests/extract.rs
mod common;

use common::{listing, PAGE1};
use review_scrape::specs::reviews::{extract_reviews, parse_reviews};
use scraper::Html;

#[test]
fn fixture_page_yields_two_reviews_in_dom_order() {
    let reviews = parse_reviews(PAGE1);
    assert_eq!(reviews.len(), 2, "placeholder item must be skipped");

    let first = &reviews[0];
    assert_eq!(first.place_name, "Quán Ăn Huế O Xuân 2");
    assert_eq!(first.author, "Minh Anh");
    assert_eq!(first.rating, "8,6");
    assert_eq!(first.date, "Đã đăng vào 5/3/2023 19:42");
    // extractor trims but does not collapse inner whitespace
    assert!(first.text.starts_with("Great food!"));
    assert!(first.text.ends_with("Loved it"));
    assert!(first.text.contains('\n'));

    let second = &reviews[1];
    assert_eq!(second.author, "Tuấn");
    assert_eq!(second.rating, "9");
    assert_eq!(second.date, "", "missing .ru-time reads as empty");
}

#[test]
fn missing_sub_elements_become_empty_strings() {
    let html = r#"<html><head><title>Solo</title></head><body>
        <div class="review-item"><p>nothing we know about</p></div>
    </body></html>"#;
    let reviews = parse_reviews(html);
    assert_eq!(reviews.len(), 1);
    let r = &reviews[0];
    assert_eq!(r.place_name, "Solo");
    assert_eq!((r.author.as_str(), r.rating.as_str(), r.date.as_str(), r.text.as_str()), ("", "", "", ""));
}

#[test]
fn placeholder_in_author_or_rating_skips_but_elsewhere_does_not() {
    let html = listing("P | site", &[
        ("{{ name }}", "8", "1/1/2024", "author placeholder"),
        ("Lan", "{{ pts }}", "1/1/2024", "rating placeholder"),
        ("Hoa", "7", "{{ date }}", "only the date is templated"),
        ("Mai", "6", "1/1/2024", "text has {{ braces }} inside"),
    ]);
    let reviews = parse_reviews(&html);
    let authors: Vec<&str> = reviews.iter().map(|r| r.author.as_str()).collect();
    assert_eq!(authors, vec!["Hoa", "Mai"]);
}

#[test]
fn page_without_title_has_empty_place_name() {
    let html = r#"<body><div class="review-item"><span class="ru-username">X</span></div></body>"#;
    let reviews = extract_reviews(&Html::parse_document(html));
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].place_name, "");
}

#[test]
fn page_without_items_is_empty_not_an_error() {
    assert!(parse_reviews("<html><title>Empty | Foody</title></html>").is_empty());
    assert!(parse_reviews("").is_empty());
}
