//! Dialect tokenizers
//!
//! One single-pass scanner per displayed text dialect. Every tokenizer is a
//! total function over arbitrary line text: unknown bytes are skipped, and
//! unterminated strings or comments end at the end of the line.
//!
//! # Module Organization
//!
//! - [`pseudo`] - decompiled pseudocode
//! - [`disasm`] - disassembly listings with address prefixes
//! - [`wat`] - WebAssembly text format
//! - [`rules`] - priority-ordered word classification tables
//! - [`scanner`] - the shared cursor the dialects are built from
//! - [`vocab`] - keyword, type and instruction vocabularies
//! - [`char_class`] - byte class lookup tables

pub mod char_class;
pub mod disasm;
pub mod pseudo;
pub mod rules;
pub mod scanner;
pub mod vocab;
pub mod wat;

pub use disasm::tokenize_disasm;
pub use pseudo::tokenize_pseudo;
pub use wat::{tokenize_wat, tokenize_wat_with_state};

use crate::error::Error;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A displayed text dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Decompiled pseudocode
    #[serde(alias = "pseudo")]
    Decompile,
    /// Disassembly listing
    Disasm,
    /// WebAssembly text format
    Wat,
}

impl Dialect {
    /// All dialects
    pub const ALL: [Dialect; 3] = [Dialect::Decompile, Dialect::Disasm, Dialect::Wat];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Decompile => "decompile",
            Dialect::Disasm => "disasm",
            Dialect::Wat => "wat",
        }
    }

    /// Tokenize a single line with no carried state
    pub fn tokenize(self, line_text: &str, line_offset_base: usize) -> Vec<Token> {
        tokenize(self, line_text, line_offset_base)
    }

    /// Tokenize a line as part of a document, carrying state between lines
    ///
    /// Only the text format carries anything (an open block comment); the
    /// other dialects are purely line-local.
    pub fn tokenize_line(
        self,
        line_text: &str,
        line_offset_base: usize,
        state: &mut LineState,
    ) -> Vec<Token> {
        match self {
            Dialect::Decompile => tokenize_pseudo(line_text, line_offset_base),
            Dialect::Disasm => tokenize_disasm(line_text, line_offset_base),
            Dialect::Wat => tokenize_wat_with_state(line_text, line_offset_base, state),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decompile" | "pseudo" | "pseudocode" => Ok(Dialect::Decompile),
            "disasm" | "disassembly" => Ok(Dialect::Disasm),
            "wat" => Ok(Dialect::Wat),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

/// Scanner state carried from one line to the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    /// Nesting depth of a block comment still open at the end of the line
    pub block_comment_depth: u32,
}

/// Tokenize one line of `dialect` text
///
/// Offsets in the returned tokens are `line_offset_base` plus the byte
/// position within `line_text`.
pub fn tokenize(dialect: Dialect, line_text: &str, line_offset_base: usize) -> Vec<Token> {
    match dialect {
        Dialect::Decompile => tokenize_pseudo(line_text, line_offset_base),
        Dialect::Disasm => tokenize_disasm(line_text, line_offset_base),
        Dialect::Wat => tokenize_wat(line_text, line_offset_base),
    }
}
