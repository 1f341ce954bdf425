// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use review_scrape::{clean::clean_reviews, specs::reviews::parse_reviews};

/// A listing page about the size the site serves (a few dozen items).
fn synthetic_page(items: usize) -> String {
    let mut html = String::from("<html><head><title>Bench Place | Foody.vn</title></head><body><ul>");
    for i in 0..items {
        html.push_str(&format!(
            r#"<li class="review-item">
                 <a class="ru-username">User {i}</a>
                 <div class="review-points"><span>{},{}</span></div>
                 <span class="ru-time">{}/{}/2023 12:00</span>
                 <div class="review-des">  Review body number {i}
                     with   some   spacing to collapse. </div>
               </li>"#,
            i % 10,
            i % 7,
            i % 28 + 1,
            i % 12 + 1,
        ));
    }
    html.push_str("</ul></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(40);

    c.bench_function("parse_reviews_40", |b| {
        b.iter(|| {
            let rows = parse_reviews(black_box(&doc));
            black_box(rows.len())
        })
    });

    let raw = parse_reviews(&doc);
    c.bench_function("clean_reviews_40", |b| {
        b.iter(|| {
            let rows = clean_reviews(black_box(raw.clone()));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
