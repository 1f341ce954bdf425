// src/core/html.rs
//
// Thin helpers over `scraper` so page specs read as "find X under Y".

use scraper::{ElementRef, Html, Selector};

/// Compile a selector literal. Only for the crate's own constant selectors,
/// which are covered by tests.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e:?}"))
}

/// All descendant text of `el`, concatenated and trimmed.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first match of `sel` under `scope`, if any.
pub fn select_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(element_text)
}

/// Raw (untrimmed) text of the first match of `sel` anywhere in the document.
pub fn document_text(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel).next().map(|el| el.text().collect())
}
