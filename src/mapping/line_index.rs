//! Pseudocode line ↔ instruction offset index

use super::{DecompileResult, LineMapping};
use crate::error::Result;
use hashbrown::HashMap;
use serde::Deserialize;

/// Bidirectional index between pseudocode lines and instruction offsets
///
/// Each offset is owned by at most one line. When the input claims an offset
/// for several lines the lowest line number keeps it, independent of input
/// order. Lines left with no offsets are not indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingIndex {
    by_line: HashMap<usize, Vec<u64>>,
    by_offset: HashMap<u64, usize>,
    /// All mapped offsets, ascending
    sorted_offsets: Vec<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MappingInput {
    Table(Vec<LineMapping>),
    Result(DecompileResult),
}

impl MappingIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the decompiler's line table
    pub fn from_line_table(table: &[LineMapping]) -> Self {
        Self::from_offset_pairs(
            table
                .iter()
                .flat_map(|row| row.offsets.iter().map(move |&offset| (offset, row.line))),
        )
    }

    /// Build from `(offset, line)` pairs
    pub fn from_offset_pairs(pairs: impl IntoIterator<Item = (u64, usize)>) -> Self {
        let mut by_offset: HashMap<u64, usize> = HashMap::new();
        for (offset, line) in pairs {
            by_offset
                .entry(offset)
                .and_modify(|owner| {
                    if *owner != line {
                        log_debug!(
                            "offset {:#x} claimed by lines {} and {}",
                            offset,
                            *owner,
                            line
                        );
                        *owner = (*owner).min(line);
                    }
                })
                .or_insert(line);
        }

        let mut by_line: HashMap<usize, Vec<u64>> = HashMap::new();
        for (&offset, &line) in &by_offset {
            by_line.entry(line).or_default().push(offset);
        }
        for offsets in by_line.values_mut() {
            offsets.sort_unstable();
        }

        let mut sorted_offsets: Vec<u64> = by_offset.keys().copied().collect();
        sorted_offsets.sort_unstable();

        log_debug!(
            "indexed {} offsets across {} lines",
            sorted_offsets.len(),
            by_line.len()
        );

        Self {
            by_line,
            by_offset,
            sorted_offsets,
        }
    }

    /// Decode a line table, or a full decompile result, from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let table = match serde_json::from_str(json)? {
            MappingInput::Table(table) => table,
            MappingInput::Result(result) => result.mappings,
        };
        Ok(Self::from_line_table(&table))
    }

    /// Offsets owned by `line`, ascending; empty if the line is unmapped
    pub fn offsets_for_line(&self, line: usize) -> &[u64] {
        self.by_line.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Line owning `offset`
    #[inline]
    pub fn line_for_offset(&self, offset: u64) -> Option<usize> {
        self.by_offset.get(&offset).copied()
    }

    /// Line owning the nearest mapped offset at or before `offset`
    ///
    /// Instructions the decompiler folded into a neighbouring expression have
    /// no entry of their own; this attributes them to the preceding one.
    pub fn line_at_or_before(&self, offset: u64) -> Option<usize> {
        let idx = self.sorted_offsets.partition_point(|&o| o <= offset);
        let nearest = *self.sorted_offsets.get(idx.checked_sub(1)?)?;
        self.line_for_offset(nearest)
    }

    /// Check if `line` owns any offsets
    #[inline]
    pub fn contains_line(&self, line: usize) -> bool {
        self.by_line.contains_key(&line)
    }

    /// Mapped lines, ascending
    pub fn lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.by_line.keys().copied().collect();
        lines.sort_unstable();
        lines
    }

    /// Number of mapped lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.by_line.len()
    }

    /// Number of mapped offsets
    #[inline]
    pub fn offset_count(&self) -> usize {
        self.by_offset.len()
    }

    /// Check if nothing is mapped
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_offset.is_empty()
    }

    /// All mapped offsets, ascending
    #[inline]
    pub fn offsets(&self) -> &[u64] {
        &self.sorted_offsets
    }

    /// Distinct lines owning any of `offsets`, ascending
    pub fn lines_for_offsets(&self, offsets: impl IntoIterator<Item = u64>) -> Vec<usize> {
        let mut lines: Vec<usize> = offsets
            .into_iter()
            .filter_map(|o| self.line_for_offset(o))
            .collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Normalized line table, ordered by line
    pub fn to_line_table(&self) -> Vec<LineMapping> {
        self.lines()
            .into_iter()
            .map(|line| LineMapping::new(line, self.offsets_for_line(line).to_vec()))
            .collect()
    }
}
