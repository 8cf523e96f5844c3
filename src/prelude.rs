//! Prelude module for convenient imports
//!
//! ```
//! use wasmspy_core::prelude::*;
//! ```
//!
//! # Re-exported Items
//!
//! ## Tokenizing
//! - [`tokenize()`] - Tokenize one line of any dialect
//! - [`Dialect`] - Pseudocode, disassembly or text format
//! - [`Token`] / [`TokenKind`] - Classified spans
//!
//! ## Highlighting
//! - [`Document`] - Line-indexed text
//! - [`Highlighter`] - Keeps decorations current
//! - [`DecorationSet`] - Sorted, non-overlapping styled spans
//! - [`Palette`] - Syntax colors
//!
//! ## Mapping
//! - [`MappingIndex`] - Pseudocode line ↔ instruction offsets
//! - [`DisasmMapping`] - Listing line ↔ instruction offset
//! - [`CrossView`] - Navigation between the two views

// ============================================================================
// Tokenizing
// ============================================================================

pub use crate::lexer::{tokenize, Dialect, LineState};
pub use crate::token::{Token, TokenKind};

// ============================================================================
// Highlighting
// ============================================================================

pub use crate::config::HighlightConfig;
pub use crate::highlight::{DecorationSet, Document, Highlighter, Palette};

// ============================================================================
// Mapping
// ============================================================================

pub use crate::config::SyncConfig;
pub use crate::mapping::{CrossView, DisasmMapping, LineMapping, MappingIndex};

// ============================================================================
// Error Handling
// ============================================================================

pub use crate::error::Error;
