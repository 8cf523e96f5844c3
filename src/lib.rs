//! wasmspy-core - tokenizers and cross-view mapping for a WebAssembly inspector
//!
//! A compiled module is shown side by side as decompiled pseudocode, a
//! disassembly listing and the WebAssembly text format. This crate provides:
//! - Single-pass tokenizers for all three dialects
//! - A highlight driver producing sorted, non-overlapping decorations
//! - Syntax palettes and stylesheet generation
//! - Line ↔ instruction offset indices linking pseudocode and disassembly
//! - Optional WASM bindings
//!
//! ## Quick Start
//!
//! ```rust
//! use wasmspy_core::{tokenize, Dialect, TokenKind};
//!
//! let line = "i32.add ;; trailing note";
//! let tokens = tokenize(Dialect::Wat, line, 0);
//! assert_eq!(tokens[0].kind, TokenKind::Instruction);
//! assert_eq!(tokens[1].text(line), ";; trailing note");
//! ```
//!
//! ## Mapping Pseudocode to Instructions
//!
//! ```rust
//! use wasmspy_core::MappingIndex;
//!
//! let index = MappingIndex::from_json(r#"[{"line": 3, "offsets": [20, 18]}]"#).unwrap();
//! assert_eq!(index.offsets_for_line(3), &[18, 20]);
//! assert_eq!(index.line_for_offset(20), Some(3));
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm` - Enable WebAssembly bindings
//! - `logging` - Enable debug logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod highlight;
pub mod lexer;
pub mod mapping;
pub mod prelude;
pub mod token;

/// Re-export commonly used types for convenience
pub use config::{HighlightConfig, SyncConfig};
pub use error::{Error, Result};
pub use highlight::{Decoration, DecorationSet, Document, Highlighter, Line, Palette, Style};
pub use lexer::{tokenize, tokenize_disasm, tokenize_pseudo, tokenize_wat, Dialect, LineState};
pub use mapping::{CrossView, DecompileResult, DisasmMapping, LineMapping, MappingIndex};
pub use token::{Token, TokenKind};

// Conditional compilation for WASM bindings
#[cfg(feature = "wasm")]
mod wasm;
