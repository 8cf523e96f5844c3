//! Pseudocode ↔ disassembly navigation

use super::{DisasmMapping, MappingIndex};
use crate::config::SyncConfig;
use std::ops::RangeInclusive;

/// Both mappings of one function plus the user's sync settings
#[derive(Debug, Clone, Default)]
pub struct CrossView {
    /// Pseudocode line index
    pub pseudo: MappingIndex,
    /// Disassembly listing mapping
    pub disasm: DisasmMapping,
    /// Which interactions are mirrored
    pub sync: SyncConfig,
}

impl CrossView {
    /// Combine the two mappings
    pub fn new(pseudo: MappingIndex, disasm: DisasmMapping, sync: SyncConfig) -> Self {
        Self {
            pseudo,
            disasm,
            sync,
        }
    }

    /// Disassembly lines for the instructions behind `pseudo_line`, ascending
    pub fn disasm_lines_for(&self, pseudo_line: usize) -> Vec<usize> {
        let mut lines: Vec<usize> = self
            .pseudo
            .offsets_for_line(pseudo_line)
            .iter()
            .filter_map(|&o| self.disasm.line_for_offset(o))
            .collect();
        lines.sort_unstable();
        lines
    }

    /// Pseudocode line produced from the instruction on `disasm_line`
    ///
    /// Falls back to the nearest preceding mapped instruction.
    pub fn pseudo_line_for(&self, disasm_line: usize) -> Option<usize> {
        let offset = self.disasm.offset_for_line(disasm_line)?;
        self.pseudo
            .line_for_offset(offset)
            .or_else(|| self.pseudo.line_at_or_before(offset))
    }

    /// Disassembly lines to highlight for a pseudocode selection
    ///
    /// Empty when selection sync is off.
    pub fn mirror_selection(&self, pseudo_lines: RangeInclusive<usize>) -> Vec<usize> {
        if !self.sync.sync_selection {
            return Vec::new();
        }
        let mut lines: Vec<usize> = pseudo_lines
            .flat_map(|line| self.disasm_lines_for(line))
            .collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Disassembly line to scroll to when `pseudo_line` is revealed
    ///
    /// `None` when scroll sync is off or the line is unmapped.
    pub fn scroll_target(&self, pseudo_line: usize) -> Option<usize> {
        if !self.sync.sync_scroll {
            return None;
        }
        self.disasm_lines_for(pseudo_line).first().copied()
    }
}
