// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use review_scrape::core::net::{Fetch, FetchedPage};
use review_scrape::progress::Progress;
use review_scrape::{Result, ScrapeError};

pub const PAGE1: &str = include_str!("../fixtures/listing_page1.html");

/// What a scripted URL answers with.
pub enum Reply {
    Page(FetchedPage),
    Fail(String),
}

/// In-memory page source. Unknown URLs answer 404. Every request is recorded.
#[derive(Default)]
pub struct ScriptedFetcher {
    replies: HashMap<String, Reply>,
    pub requested: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Page(FetchedPage::ok(body)));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.replies.insert(url.to_string(), Reply::Page(FetchedPage::status(status)));
        self
    }

    pub fn fail(mut self, url: &str, msg: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Fail(msg.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for ScriptedFetcher {
    fn get(&self, url: &str) -> Result<FetchedPage> {
        self.requested.borrow_mut().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Page(p)) => Ok(p.clone()),
            Some(Reply::Fail(msg)) => Err(ScrapeError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                msg.clone(),
            ))),
            None => Ok(FetchedPage::status(404)),
        }
    }
}

/// Collects every progress event as a line.
#[derive(Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub done: Vec<(String, usize)>,
    pub failed: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, url: &str, records: usize) {
        self.done.push((url.to_string(), records));
    }
    fn item_failed(&mut self, url: &str, _error: &str) {
        self.failed.push(url.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

/// A listing page with one review item per `(author, rating, date, text)`.
pub fn listing(title: &str, items: &[(&str, &str, &str, &str)]) -> String {
    let mut html = format!("<html><head><title>{title}</title></head><body>");
    for (author, rating, date, text) in items {
        html.push_str(&format!(
            r#"<div class="review-item"><a class="ru-username">{author}</a><div class="review-points">{rating}</div><span class="ru-time">{date}</span><div class="review-des">{text}</div></div>"#
        ));
    }
    html.push_str("</body></html>");
    html
}
