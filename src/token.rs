//! Token model shared by every dialect tokenizer and the highlight driver
//!
//! A [`Token`] is a classified, offset-bounded span of document text. Offsets
//! are absolute byte offsets into the document: tokenizers add the line's
//! start offset to every position they emit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Closed vocabulary of token classifications
///
/// Every dialect draws from the same set, so the renderer never has to know
/// which tokenizer produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// Structural keyword (`func`, `if`, `module`, ...)
    Keyword,
    /// Value type name (`i32`, `f64`, `funcref`, ...)
    Type,
    /// Instruction mnemonic (`i32.add`, `local.get`, ...)
    Instruction,
    /// Call target: a word directly followed by `(`
    Function,
    /// Ordinary variable or sigil reference
    Variable,
    /// Global variable
    #[serde(rename = "variableSpecial")]
    SpecialVariable,
    /// Quoted string literal, quotes included
    String,
    /// Numeric literal or address
    Number,
    /// Line or block comment
    Comment,
    /// Branch label (`L0`, `L12`)
    Label,
    /// Brackets, parens and separators
    Punctuation,
    /// Arithmetic, comparison and bitwise operator runs
    Operator,
    /// Recognized word with no styling
    Unclassified,
}

impl TokenKind {
    /// All kinds, in declaration order
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::Instruction,
        TokenKind::Function,
        TokenKind::Variable,
        TokenKind::SpecialVariable,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Label,
        TokenKind::Punctuation,
        TokenKind::Operator,
        TokenKind::Unclassified,
    ];

    /// Short name, as used in JSON and CSS
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "type",
            TokenKind::Instruction => "instruction",
            TokenKind::Function => "function",
            TokenKind::Variable => "variable",
            TokenKind::SpecialVariable => "variableSpecial",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Label => "label",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Operator => "operator",
            TokenKind::Unclassified => "unclassified",
        }
    }

    /// CSS class applied to decorated spans of this kind
    pub fn class_name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "tok-keyword",
            TokenKind::Type => "tok-type",
            TokenKind::Instruction => "tok-instruction",
            TokenKind::Function => "tok-function",
            TokenKind::Variable => "tok-variable",
            TokenKind::SpecialVariable => "tok-variableSpecial",
            TokenKind::String => "tok-string",
            TokenKind::Number => "tok-number",
            TokenKind::Comment => "tok-comment",
            TokenKind::Label => "tok-label",
            TokenKind::Punctuation => "tok-punctuation",
            TokenKind::Operator => "tok-operator",
            TokenKind::Unclassified => "tok-unclassified",
        }
    }

    /// Whether spans of this kind receive a visual style
    #[inline]
    pub fn is_styled(self) -> bool {
        self != TokenKind::Unclassified
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of document text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Start byte offset (inclusive)
    pub from: usize,
    /// End byte offset (exclusive)
    pub to: usize,
    /// Classification
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token
    #[inline]
    pub fn new(from: usize, to: usize, kind: TokenKind) -> Self {
        debug_assert!(from < to, "empty token {}..{}", from, to);
        Self { from, to, kind }
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// Tokens are never empty; provided for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }

    /// Byte range covered by this token
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.from..self.to
    }

    /// Check if this token overlaps another
    #[inline]
    pub fn overlaps(&self, other: &Token) -> bool {
        self.from < other.to && other.from < self.to
    }

    /// Slice the covered text out of `source`
    ///
    /// `source` must be the text the offsets refer to (the whole document, or
    /// the line itself when tokenized with a zero base).
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.from..self.to).unwrap_or("")
    }
}
