//! Test utilities for seep development.
//!
//! Provides a buffering [`Reporter`] implementation so tests can assert on
//! report text without intercepting the real output stream, plus fixture
//! constructors for grids, packages, and models.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use seep_core::Reporter;

/// Reporter that accumulates emitted text in memory.
#[derive(Clone, Debug, Default)]
pub struct BufferReporter {
    text: String,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Drop accumulated text.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl Reporter for BufferReporter {
    fn emit(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Reporter that discards everything. For tests asserting that nothing is
/// emitted, pair with [`CountingReporter`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn emit(&mut self, _text: &str) {}
}

/// Reporter that counts emit calls and bytes without keeping the text.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountingReporter {
    pub calls: usize,
    pub bytes: usize,
}

impl Reporter for CountingReporter {
    fn emit(&mut self, text: &str) {
        self.calls += 1;
        self.bytes += text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_reporter_accumulates_in_order() {
        let mut r = BufferReporter::new();
        r.emit("first ");
        r.emit("second");
        assert_eq!(r.text(), "first second");
        r.clear();
        assert!(r.text().is_empty());
    }

    #[test]
    fn counting_reporter_counts_calls_and_bytes() {
        let mut r = CountingReporter::default();
        r.emit("abc");
        r.emit("de");
        assert_eq!(r.calls, 2);
        assert_eq!(r.bytes, 5);
    }
}
