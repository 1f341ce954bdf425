// src/progress.rs
/// Lightweight progress reporting used by long-running operations (crawl/export).
/// Frontends implement this to surface status to users; diagnostics go to `tracing`.
pub trait Progress {
    /// Called at the start with the total number of targets.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One target finished (possibly cut short by a non-200 page).
    fn item_done(&mut self, _url: &str, _records: usize) {}

    /// One target failed and was skipped.
    fn item_failed(&mut self, _url: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stdout, one per event.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self { Self::default() }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, _url: &str, _records: usize) {
        self.done += 1;
    }
    fn item_failed(&mut self, url: &str, error: &str) {
        self.failed += 1;
        println!("Error when crawling URL: {url} -> {error}");
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            println!("Targets: {}/{} ok, {} failed", self.done, self.total, self.failed);
        }
    }
}
