//! Highlight driver
//!
//! Turns a [`Document`] into a [`DecorationSet`] for one dialect and keeps it
//! current. Any change to the document rebuilds the whole set.
//!
//! # Example
//!
//! ```rust
//! use wasmspy_core::highlight::{Document, Highlighter};
//! use wasmspy_core::{Dialect, HighlightConfig, TokenKind};
//!
//! let mut doc = Document::new("local.get $x");
//! let mut hl = Highlighter::new(Dialect::Wat, HighlightConfig::default(), &doc);
//! assert_eq!(hl.decorations().len(), 2);
//!
//! doc.edit(0..0, ";; ");
//! assert!(hl.update(&doc));
//! assert_eq!(hl.decorations().kind_at(0), Some(TokenKind::Comment));
//! ```

pub mod decoration;
pub mod document;
pub mod palette;

pub use decoration::{Decoration, DecorationSet};
pub use document::{Document, Line};
pub use palette::{Palette, Style};

use crate::config::HighlightConfig;
use crate::lexer::Dialect;

/// Keeps a decoration set in step with a document
#[derive(Debug, Clone)]
pub struct Highlighter {
    dialect: Dialect,
    config: HighlightConfig,
    set: DecorationSet,
    version: u64,
}

impl Highlighter {
    /// Create a highlighter and build the initial decorations for `doc`
    pub fn new(dialect: Dialect, config: HighlightConfig, doc: &Document) -> Self {
        let set = DecorationSet::build(doc, dialect, &config);
        Self {
            dialect,
            config,
            set,
            version: doc.version(),
        }
    }

    /// Rebuild if `doc` changed since the last build
    ///
    /// Returns whether a rebuild happened.
    pub fn update(&mut self, doc: &Document) -> bool {
        if doc.version() == self.version {
            return false;
        }
        self.rebuild(doc);
        true
    }

    /// Rebuild unconditionally
    pub fn rebuild(&mut self, doc: &Document) {
        self.set = DecorationSet::build(doc, self.dialect, &self.config);
        self.version = doc.version();
    }

    /// Switch dialect and rebuild
    pub fn set_dialect(&mut self, dialect: Dialect, doc: &Document) {
        self.dialect = dialect;
        self.rebuild(doc);
    }

    /// Replace the configuration and rebuild
    pub fn set_config(&mut self, config: HighlightConfig, doc: &Document) {
        self.config = config;
        self.rebuild(doc);
    }

    /// Current decorations
    #[inline]
    pub fn decorations(&self) -> &DecorationSet {
        &self.set
    }

    /// Dialect in use
    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Configuration in use
    #[inline]
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// CSS for the configured palette
    pub fn stylesheet(&self) -> String {
        self.config.palette.stylesheet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_update_only_on_change() {
        let mut doc = Document::new("nop");
        let mut hl = Highlighter::new(Dialect::Disasm, HighlightConfig::default(), &doc);
        assert!(!hl.update(&doc));

        doc.edit(3..3, "\ndrop");
        assert!(hl.update(&doc));
        assert_eq!(hl.decorations().len(), 2);
        assert!(!hl.update(&doc));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let doc = Document::new("func f(v0: i32) {\n  L0: br L0;\n}");
        let mut hl = Highlighter::new(Dialect::Decompile, HighlightConfig::default(), &doc);
        let first = hl.decorations().clone();
        hl.rebuild(&doc);
        assert_eq!(hl.decorations(), &first);
    }

    #[test]
    fn test_set_dialect_and_config() {
        let doc = Document::new("frobnicate");
        let mut hl = Highlighter::new(Dialect::Wat, HighlightConfig::default(), &doc);
        assert!(hl.decorations().is_empty());

        hl.set_config(HighlightConfig::new().with_decorate_unclassified(true), &doc);
        assert_eq!(hl.decorations().kind_at(0), Some(TokenKind::Unclassified));

        hl.set_dialect(Dialect::Decompile, &doc);
        assert_eq!(hl.dialect(), Dialect::Decompile);
        assert!(hl.config().decorate_unclassified);
    }

    #[test]
    fn test_stylesheet_follows_palette() {
        let doc = Document::new("");
        let hl = Highlighter::new(
            Dialect::Wat,
            HighlightConfig::new().with_palette(Palette::github_dark()),
            &doc,
        );
        assert!(hl.stylesheet().contains("#ff7b72"));
    }
}
