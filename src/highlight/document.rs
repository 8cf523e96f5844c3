//! Line-indexed document text
//!
//! A [`Document`] owns the rendered text of one view and the start offset of
//! every line. Lines are numbered from 1, matching both the editor gutter and
//! the decompiler's mapping tables.

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of document versions; each construction or edit draws a fresh one
static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

/// One line of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Byte offset of the first character
    pub from: usize,
    /// Line text without the line terminator
    pub text: &'a str,
}

impl Line<'_> {
    /// Byte offset just past the last character
    #[inline]
    pub fn to(&self) -> usize {
        self.from + self.text.len()
    }
}

/// Document text with a line start index
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    line_starts: Vec<usize>,
    version: u64,
}

impl Document {
    /// Create a document and index its lines
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self {
            text,
            line_starts,
            version: next_version(),
        }
    }

    /// Full document text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Version identifying this exact text
    ///
    /// Distinct documents and every edit get distinct versions, so an
    /// unchanged version means unchanged text.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Total length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the document is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines; an empty document has one empty line
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Line by 1-based number
    pub fn line(&self, number: usize) -> Option<Line<'_>> {
        let index = number.checked_sub(1)?;
        let from = *self.line_starts.get(index)?;
        let end = match self.line_starts.get(index + 1) {
            Some(&next) => next - 1, // exclude '\n'
            None => self.text.len(),
        };
        let raw = &self.text[from..end];
        Some(Line {
            number,
            from,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        })
    }

    /// Iterate over all lines
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        (1..=self.line_count()).filter_map(move |n| self.line(n))
    }

    /// 1-based number of the line containing `offset`
    ///
    /// Offsets past the end resolve to the last line.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        // Binary search for the line containing offset
        match self.line_starts.binary_search(&offset) {
            Ok(i) => i + 1,
            Err(i) => i.max(1),
        }
    }

    /// Replace `range` with `replacement`, reindexing lines
    ///
    /// Both ends are clamped to the document and moved back to the nearest
    /// char boundary, so an offset inside a multi-byte char never removes
    /// it. Returns the byte range the replacement now occupies.
    pub fn edit(&mut self, range: Range<usize>, replacement: &str) -> Range<usize> {
        let start = floor_char_boundary(&self.text, range.start);
        let end = floor_char_boundary(&self.text, range.end).max(start);

        self.text.replace_range(start..end, replacement);
        self.line_starts = compute_line_starts(&self.text);
        self.version = next_version();

        start..start + replacement.len()
    }

    /// Replace the whole text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.line_starts = compute_line_starts(&self.text);
        self.version = next_version();
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::new(text)
    }
}

/// Largest char boundary of `text` at or below `offset`
fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Compute byte offsets for the start of each line
fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let doc = Document::new("func f() {\r\n  return\n}");
        assert_eq!(doc.line_count(), 3);
        let lines: Vec<_> = doc.lines().collect();
        assert_eq!(lines[0].text, "func f() {");
        assert_eq!(lines[1].from, 12);
        assert_eq!(lines[1].text, "  return");
        assert_eq!(lines[2].number, 3);
        assert_eq!(lines[2].text, "}");
        assert_eq!(lines[2].to(), doc.len());
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let doc = Document::new("a\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(2).unwrap().text, "");
        assert!(doc.line(3).is_none());
        assert!(doc.line(0).is_none());
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line(1).unwrap().text, "");
        assert_eq!(doc.line_at_offset(0), 1);
    }

    #[test]
    fn test_line_at_offset() {
        let doc = Document::new("ab\ncd\nef");
        assert_eq!(doc.line_at_offset(0), 1);
        assert_eq!(doc.line_at_offset(2), 1);
        assert_eq!(doc.line_at_offset(3), 2);
        assert_eq!(doc.line_at_offset(7), 3);
        assert_eq!(doc.line_at_offset(100), 3);
    }

    #[test]
    fn test_edit_reindexes_and_bumps_version() {
        let mut doc = Document::new("ab\ncd");
        let before = doc.version();
        let inserted = doc.edit(1..4, "X\nY\nZ");
        assert_eq!(doc.text(), "aX\nY\nZd");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(inserted, 1..6);
        assert_eq!(&doc.text()[inserted], "X\nY\nZ");
        assert_ne!(doc.version(), before);
    }

    #[test]
    fn test_insert_inside_char_keeps_it() {
        let mut doc = Document::new("aéb");
        // 2 is inside the two-byte 'é'
        let inserted = doc.edit(2..2, "!");
        assert_eq!(inserted, 1..2);
        assert_eq!(doc.text(), "a!éb");
    }

    #[test]
    fn test_replace_ending_inside_char_keeps_it() {
        let mut doc = Document::new("xaéb");
        let inserted = doc.edit(0..3, "-");
        assert_eq!(inserted, 0..1);
        assert_eq!(doc.text(), "-éb");
    }

    #[test]
    fn test_edit_past_end_appends() {
        let mut doc = Document::new("a!éb");
        let inserted = doc.edit(10..20, "c");
        assert_eq!(inserted, 5..6);
        assert_eq!(doc.text(), "a!ébc");

        // reversed range collapses to an insert at its start
        let inserted = doc.edit(3..1, "?");
        assert_eq!(inserted, 2..3);
        assert_eq!(doc.text(), "a!?ébc");
    }

    #[test]
    fn test_distinct_documents_have_distinct_versions() {
        let a = Document::new("x");
        let b = Document::new("x");
        assert_ne!(a.version(), b.version());
    }

    #[test]
    fn test_set_text_reindexes() {
        let mut doc = Document::new("a");
        let before = doc.version();
        doc.set_text("x\ny");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(2).unwrap().text, "y");
        assert_ne!(doc.version(), before);
    }
}
