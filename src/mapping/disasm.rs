//! Disassembly line ↔ instruction offset mapping

use crate::lexer::disasm::address_prefix_len;
use hashbrown::HashMap;

/// One-to-one mapping between listing lines and instruction offsets
///
/// The first claim on a line or an offset wins; later conflicting pairs are
/// ignored so the mapping stays one-to-one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisasmMapping {
    offset_to_line: HashMap<u64, usize>,
    line_to_offset: HashMap<usize, u64>,
}

impl DisasmMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(offset, line)` pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, usize)>) -> Self {
        let mut mapping = Self::new();
        for (offset, line) in pairs {
            mapping.insert(offset, line);
        }
        mapping
    }

    /// Build from listing text
    ///
    /// Every line starting with a hex address followed by `:` maps that
    /// address to its 1-based line number. Headers and annotations are
    /// skipped.
    pub fn from_listing(text: &str) -> Self {
        Self::from_pairs(text.lines().enumerate().filter_map(|(i, line)| {
            let digits = address_prefix_len(line)?;
            let offset = u64::from_str_radix(&line[..digits], 16).ok()?;
            Some((offset, i + 1))
        }))
    }

    /// Add a pair; returns `false` if either side was already mapped
    pub fn insert(&mut self, offset: u64, line: usize) -> bool {
        if self.offset_to_line.contains_key(&offset) || self.line_to_offset.contains_key(&line) {
            log_debug!("ignoring disassembly pair {:#x} -> line {}", offset, line);
            return false;
        }
        self.offset_to_line.insert(offset, line);
        self.line_to_offset.insert(line, offset);
        true
    }

    /// Listing line showing the instruction at `offset`
    #[inline]
    pub fn line_for_offset(&self, offset: u64) -> Option<usize> {
        self.offset_to_line.get(&offset).copied()
    }

    /// Instruction offset shown on `line`
    #[inline]
    pub fn offset_for_line(&self, line: usize) -> Option<u64> {
        self.line_to_offset.get(&line).copied()
    }

    /// Number of mapped pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.offset_to_line.len()
    }

    /// Check if nothing is mapped
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset_to_line.is_empty()
    }
}
