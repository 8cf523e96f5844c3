//! Materialized decoration sets
//!
//! A [`DecorationSet`] is the sorted, non-overlapping list of styled spans for
//! one document. It is always rebuilt in full; nothing is patched in place.

use super::document::Document;
use crate::config::HighlightConfig;
use crate::lexer::{Dialect, LineState};
use crate::token::{Token, TokenKind};
use std::ops::Range;

/// A styled span of document text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoration {
    /// Start byte offset (inclusive)
    pub from: usize,
    /// End byte offset (exclusive)
    pub to: usize,
    /// Classification the style derives from
    pub kind: TokenKind,
}

impl Decoration {
    /// CSS class for this span
    #[inline]
    pub fn class(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Byte range covered
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }
}

impl From<Token> for Decoration {
    fn from(tok: Token) -> Self {
        Self {
            from: tok.from,
            to: tok.to,
            kind: tok.kind,
        }
    }
}

/// Sorted, non-overlapping decorations for a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    /// Tokenize every line of `doc` and materialize the result
    pub fn build(doc: &Document, dialect: Dialect, config: &HighlightConfig) -> Self {
        let mut state = LineState::default();
        let mut tokens = Vec::new();
        for line in doc.lines() {
            tokens.extend(dialect.tokenize_line(line.text, line.from, &mut state));
        }
        let set = Self::from_tokens(tokens, config.decorate_unclassified);
        log_debug!(
            "built {} decorations over {} lines ({})",
            set.len(),
            doc.line_count(),
            dialect
        );
        set
    }

    /// Build from an arbitrary token list
    ///
    /// Tokens are stable-sorted by start offset. A token overlapping the last
    /// kept one is dropped, so earlier tokens win ties.
    pub fn from_tokens(mut tokens: Vec<Token>, decorate_unclassified: bool) -> Self {
        tokens.sort_by_key(|t| t.from);

        let mut decorations: Vec<Decoration> = Vec::with_capacity(tokens.len());
        let mut last_end = 0;
        for tok in tokens {
            if tok.is_empty() || (!decorate_unclassified && !tok.kind.is_styled()) {
                continue;
            }
            if !decorations.is_empty() && tok.from < last_end {
                log_debug!("dropping overlapping {} token at {}..{}", tok.kind, tok.from, tok.to);
                continue;
            }
            last_end = tok.to;
            decorations.push(tok.into());
        }

        Self { decorations }
    }

    /// Iterate in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    /// Number of decorations
    #[inline]
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Check if there are no decorations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// All decorations as a slice
    #[inline]
    pub fn as_slice(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Decorations intersecting `range`, for rendering a viewport
    pub fn in_range(&self, range: Range<usize>) -> &[Decoration] {
        // Sorted and non-overlapping, so `to` is sorted as well
        let start = self.decorations.partition_point(|d| d.to <= range.start);
        let end = self.decorations.partition_point(|d| d.from < range.end);
        &self.decorations[start..end.max(start)]
    }

    /// Kind of the decoration covering `offset`
    pub fn kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.in_range(offset..offset + 1).first().map(|d| d.kind)
    }

    /// Render `doc` as HTML with one `<span>` per decoration
    ///
    /// Text is escaped; undecorated text is emitted bare.
    pub fn to_html(&self, doc: &Document) -> String {
        let text = doc.text();
        let mut html = String::with_capacity(text.len() * 2);
        let mut pos = 0;
        for d in &self.decorations {
            let (Some(gap), Some(inner)) = (text.get(pos..d.from), text.get(d.from..d.to)) else {
                continue;
            };
            escape_into(&mut html, gap);
            html.push_str("<span class=\"");
            html.push_str(d.class());
            html.push_str("\">");
            escape_into(&mut html, inner);
            html.push_str("</span>");
            pos = d.to;
        }
        escape_into(&mut html, text.get(pos..).unwrap_or(""));
        html
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
