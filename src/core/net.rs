// src/core/net.rs
//
// Blocking HTTP over one shared reqwest client. One request in flight at a time.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use tracing::debug;

use crate::config::consts::{ACCEPT, REFERER, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::Result;

/// Status line + body of one GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    /// Empty unless `status == 200`; error bodies are never read.
    pub body: String,
}

impl FetchedPage {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: s!() }
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

/// "Fetch a URL and return status + body."
///
/// Non-success statuses come back as `Ok` pages; `Err` is reserved for
/// transport failures (DNS, connect, timeout, broken body).
pub trait Fetch {
    fn get(&self, url: &str) -> Result<FetchedPage>;
}

/// Reusable connection context: pooled connections, cookie jar and the
/// header set sent with every request.
pub struct Session {
    client: Client,
    headers: HeaderMap,
    timeout: Duration,
}

impl Session {
    pub fn new() -> Result<Self> {
        Self::with_headers(default_headers())
    }

    pub fn with_headers(headers: HeaderMap) -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            headers,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl Fetch for Session {
    fn get(&self, url: &str) -> Result<FetchedPage> {
        let resp = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .timeout(self.timeout)
            .send()?;

        let status = resp.status();
        debug!(%url, status = status.as_u16(), "GET");
        if status != StatusCode::OK {
            return Ok(FetchedPage::status(status.as_u16()));
        }
        Ok(FetchedPage::ok(resp.text()?))
    }
}

/// `User-Agent`, `Accept` and `Referer` as the listing site expects them.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    h.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    h.insert(header::REFERER, HeaderValue::from_static(REFERER));
    h
}
