use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics collected while scanning a batch of lines
#[derive(Default, Debug)]
pub struct ScanStats {
    pub lines_scanned: AtomicU64,
    pub chars_scanned: AtomicU64,
    pub lines_matched: AtomicU64,
    pub keywords_found: AtomicU64,
    pub replacements_made: AtomicU64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_lines(&self) {
        self.lines_scanned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_chars(&self, count: u64) {
        self.chars_scanned.fetch_add(count, Ordering::Relaxed);
    }

    pub fn inc_lines_matched(&self) {
        self.lines_matched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_keywords(&self, count: u64) {
        self.keywords_found.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_replacements(&self, count: u64) {
        self.replacements_made.fetch_add(count, Ordering::Relaxed);
    }

    pub fn lines(&self) -> u64 {
        self.lines_scanned.load(Ordering::Relaxed)
    }

    pub fn chars(&self) -> u64 {
        self.chars_scanned.load(Ordering::Relaxed)
    }

    pub fn lines_matched(&self) -> u64 {
        self.lines_matched.load(Ordering::Relaxed)
    }

    pub fn keywords(&self) -> u64 {
        self.keywords_found.load(Ordering::Relaxed)
    }

    pub fn replacements(&self) -> u64 {
        self.replacements_made.load(Ordering::Relaxed)
    }
}
