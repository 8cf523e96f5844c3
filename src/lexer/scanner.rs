//! Shared single-pass scanner
//!
//! The dialect tokenizers are thin loops over a [`Scanner`]: each step tries a
//! handful of recognizers in dialect order, and when none matches the scanner
//! advances one byte without emitting anything. Every recognizer either
//! consumes at least one byte or leaves the position untouched, so the loop
//! always terminates.

use super::char_class::CHAR_CLASSES;
use super::rules::RuleTable;
use crate::token::{Token, TokenKind};
use memchr::memchr2;

/// Numeric literal syntax accepted by a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSyntax {
    /// Allow `_` separators in decimal literals
    pub decimal_underscores: bool,
    /// Allow an `e`/`E` exponent suffix
    pub exponent: bool,
}

impl NumberSyntax {
    /// `-?0x[0-9a-fA-F_]+` or `-?\d+(\.\d+)?`
    pub const PLAIN: Self = Self {
        decimal_underscores: false,
        exponent: false,
    };

    /// Text format literals: `_` separators and exponents
    pub const EXTENDED: Self = Self {
        decimal_underscores: true,
        exponent: true,
    };
}

/// Cursor over one line of text, collecting tokens
pub struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    base: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `text`; emitted offsets are shifted by `base`
    pub fn new(text: &'a str, base: usize) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            base,
            tokens: Vec::new(),
        }
    }

    /// Current position within the line
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move to `pos` (clamped to the line length)
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    /// Line text
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Check if the whole line has been consumed
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Byte at the current position
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Byte `n` positions ahead
    #[inline]
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    /// Check if the remaining text starts with `pat`
    #[inline]
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.bytes[self.pos..].starts_with(pat)
    }

    /// Advance one byte
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.bytes.len() {
            self.pos += 1;
        }
    }

    /// Advance while `predicate` holds, returning the number of bytes consumed
    #[inline]
    pub fn skip_while<F: Fn(u8) -> bool>(&mut self, predicate: F) -> usize {
        let start = self.pos;
        while self.pos < self.bytes.len() && predicate(self.bytes[self.pos]) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Skip whitespace; true if anything was skipped
    #[inline]
    pub fn skip_whitespace(&mut self) -> bool {
        self.skip_while(|b| CHAR_CLASSES.is_space(b)) > 0
    }

    /// Emit a token for line-relative `start..end`; empty ranges emit nothing
    #[inline]
    pub fn emit_range(&mut self, start: usize, end: usize, kind: TokenKind) {
        if start < end {
            self.tokens
                .push(Token::new(self.base + start, self.base + end, kind));
        }
    }

    /// Emit a token from `start` to the current position
    #[inline]
    pub fn emit(&mut self, start: usize, kind: TokenKind) {
        self.emit_range(start, self.pos, kind);
    }

    /// Emit the rest of the line as one token and move to the end
    #[inline]
    pub fn emit_rest(&mut self, kind: TokenKind) {
        let start = self.pos;
        self.pos = self.bytes.len();
        self.emit(start, kind);
    }

    /// Scan a `"`-quoted string with backslash escapes
    ///
    /// Must be called at the opening quote. Unterminated strings run to the
    /// end of the line.
    pub fn scan_string(&mut self) {
        let start = self.pos;
        self.pos += 1;
        loop {
            match memchr2(b'"', b'\\', &self.bytes[self.pos..]) {
                Some(i) => {
                    let at = self.pos + i;
                    if self.bytes[at] == b'\\' {
                        self.set_pos(at + 2);
                    } else {
                        self.pos = at + 1;
                        break;
                    }
                }
                None => {
                    self.pos = self.bytes.len();
                    break;
                }
            }
        }
        self.emit(start, TokenKind::String);
    }

    /// Check if a numeric literal starts here: a digit, or `-` then a digit
    #[inline]
    pub fn at_number(&self) -> bool {
        match self.peek() {
            Some(b) if CHAR_CLASSES.is_digit(b) => true,
            Some(b'-') => self.peek_at(1).is_some_and(|b| CHAR_CLASSES.is_digit(b)),
            _ => false,
        }
    }

    /// Scan a numeric literal; hex takes priority over decimal
    pub fn scan_number(&mut self, syntax: NumberSyntax) -> bool {
        if !self.at_number() {
            return false;
        }
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        let is_hex = self.starts_with(b"0x")
            && self
                .peek_at(2)
                .is_some_and(|b| CHAR_CLASSES.is_hex_digit(b));
        if is_hex {
            self.pos += 2;
            self.skip_while(|b| CHAR_CLASSES.is_hex_digit(b) || b == b'_');
        } else {
            self.scan_digits(syntax.decimal_underscores);
            if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|b| CHAR_CLASSES.is_digit(b)) {
                self.pos += 1;
                self.scan_digits(syntax.decimal_underscores);
            }
            if syntax.exponent {
                self.scan_exponent();
            }
        }

        self.emit(start, TokenKind::Number);
        true
    }

    fn scan_digits(&mut self, underscores: bool) {
        self.skip_while(|b| CHAR_CLASSES.is_digit(b) || (underscores && b == b'_'));
    }

    /// `[eE][+-]?\d+`; leaves the position untouched if incomplete
    fn scan_exponent(&mut self) {
        if !matches!(self.peek(), Some(b'e' | b'E')) {
            return;
        }
        let mut ahead = 1;
        if matches!(self.peek_at(1), Some(b'+' | b'-')) {
            ahead = 2;
        }
        if self.peek_at(ahead).is_some_and(|b| CHAR_CLASSES.is_digit(b)) {
            self.pos += ahead;
            self.scan_digits(false);
        }
    }

    /// Scan a bare word and classify it through `rules`
    pub fn scan_word(&mut self, rules: &RuleTable) -> bool {
        if !self.peek().is_some_and(|b| CHAR_CLASSES.is_word_start(b)) {
            return false;
        }
        let start = self.pos;
        self.skip_while(|b| CHAR_CLASSES.is_word(b));
        // Word bytes are ASCII, so both ends are char boundaries
        let word = &self.text[start..self.pos];
        let kind = rules.classify(word, &self.bytes[self.pos..]);
        self.emit(start, kind);
        true
    }

    /// Scan a sigil-led reference such as `$name`
    ///
    /// A sigil with nothing after it is consumed without emitting.
    pub fn scan_sigil(&mut self, sigil: u8) -> bool {
        if self.peek() != Some(sigil) {
            return false;
        }
        let start = self.pos;
        self.pos += 1;
        if self.skip_while(|b| CHAR_CLASSES.is_sigil(b)) > 0 {
            self.emit(start, TokenKind::Variable);
        }
        true
    }

    /// Scan a run of operator characters, stopping before `stop`
    ///
    /// An empty `stop` never matches, so the run ends only at a non-operator.
    pub fn scan_operators(&mut self, stop: &[u8]) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|b| CHAR_CLASSES.is_operator(b))
            && (stop.is_empty() || !self.starts_with(stop))
        {
            self.pos += 1;
        }
        if self.pos == start {
            return false;
        }
        self.emit(start, TokenKind::Operator);
        true
    }

    /// Scan one structural punctuation byte accepted by `accept`
    pub fn scan_punct<F: Fn(u8) -> bool>(&mut self, accept: F) -> bool {
        match self.peek() {
            Some(b) if CHAR_CLASSES.is_punct(b) && accept(b) => {
                let start = self.pos;
                self.pos += 1;
                self.emit(start, TokenKind::Punctuation);
                true
            }
            _ => false,
        }
    }

    /// Scan a nested `open ... close` block comment starting at `depth`
    ///
    /// Returns the depth still open at the end of the line (0 when the
    /// comment closed). Call with `depth == 0` at an opening marker, or with
    /// the carried depth at the start of a continuation line.
    pub fn scan_block_comment(&mut self, open: &[u8; 2], close: &[u8; 2], depth: u32) -> u32 {
        let start = self.pos;
        let mut depth = depth;
        if depth == 0 {
            if !self.starts_with(open) {
                return 0;
            }
            self.pos += 2;
            depth = 1;
        }
        while depth > 0 {
            // Jump to the next byte that could start either marker
            match memchr2(open[0], close[0], &self.bytes[self.pos..]) {
                Some(i) => self.pos += i,
                None => {
                    self.pos = self.bytes.len();
                    break;
                }
            }
            if self.starts_with(close) {
                depth -= 1;
                self.pos += 2;
            } else if self.starts_with(open) {
                depth += 1;
                self.pos += 2;
            } else {
                self.pos += 1;
            }
        }
        self.emit(start, TokenKind::Comment);
        depth
    }

    /// Finish scanning and return the collected tokens
    pub fn finish(self) -> Vec<Token> {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_string_terminated() {
        let mut s = Scanner::new(r#""a\"b" x"#, 0);
        s.scan_string();
        assert_eq!(s.pos(), 6);
        assert_eq!(s.finish(), vec![Token::new(0, 6, TokenKind::String)]);
    }

    #[test]
    fn test_string_unterminated_runs_to_eol() {
        let mut s = Scanner::new(r#""abc\"#, 10);
        s.scan_string();
        assert!(s.is_eof());
        assert_eq!(s.finish(), vec![Token::new(10, 15, TokenKind::String)]);
    }

    #[test]
    fn test_number_hex_before_decimal() {
        let mut s = Scanner::new("0x1F", 0);
        assert!(s.scan_number(NumberSyntax::PLAIN));
        assert!(s.is_eof());
    }

    #[test]
    fn test_number_0x_without_digits_is_decimal_zero() {
        let mut s = Scanner::new("0xg", 0);
        assert!(s.scan_number(NumberSyntax::PLAIN));
        assert_eq!(s.pos(), 1);
    }

    #[test]
    fn test_number_negative_and_fraction() {
        let mut s = Scanner::new("-12.5.", 0);
        assert!(s.scan_number(NumberSyntax::PLAIN));
        assert_eq!(s.pos(), 5);
    }

    #[test]
    fn test_number_minus_without_digit() {
        let mut s = Scanner::new("-x", 0);
        assert!(!s.scan_number(NumberSyntax::PLAIN));
        assert_eq!(s.pos(), 0);
    }

    #[test]
    fn test_number_exponent_only_when_extended() {
        let mut plain = Scanner::new("1e10", 0);
        plain.scan_number(NumberSyntax::PLAIN);
        assert_eq!(plain.pos(), 1);

        let mut ext = Scanner::new("1_000.5e-3", 0);
        ext.scan_number(NumberSyntax::EXTENDED);
        assert!(ext.is_eof());

        let mut incomplete = Scanner::new("2e+", 0);
        incomplete.scan_number(NumberSyntax::EXTENDED);
        assert_eq!(incomplete.pos(), 1);
    }

    #[test]
    fn test_sigil() {
        let mut s = Scanner::new("$my_var)", 0);
        assert!(s.scan_sigil(b'$'));
        assert_eq!(s.pos(), 7);

        let mut bare = Scanner::new("$ x", 0);
        assert!(bare.scan_sigil(b'$'));
        assert_eq!(bare.pos(), 1);
        assert!(bare.finish().is_empty());
    }

    #[test]
    fn test_operators_stop_before_comment() {
        let mut s = Scanner::new("+//c", 0);
        assert!(s.scan_operators(b"//"));
        assert_eq!(s.pos(), 1);
        assert_eq!(kinds(&s.finish()), vec![TokenKind::Operator]);
    }

    #[test]
    fn test_operators_without_stop_marker() {
        let mut s = Scanner::new("->=x", 0);
        assert!(s.scan_operators(b""));
        assert_eq!(s.pos(), 3);
        assert!(!s.scan_operators(b""));
    }

    #[test]
    fn test_block_comment_nested() {
        let mut s = Scanner::new("(; a (; b ;) c ;) d", 0);
        let depth = s.scan_block_comment(b"(;", b";)", 0);
        assert_eq!(depth, 0);
        assert_eq!(s.pos(), 17);
    }

    #[test]
    fn test_block_comment_unterminated() {
        let mut s = Scanner::new("(; a (; b ;)", 0);
        let depth = s.scan_block_comment(b"(;", b";)", 0);
        assert_eq!(depth, 1);
        assert!(s.is_eof());
    }

    #[test]
    fn test_block_comment_continuation() {
        let mut s = Scanner::new(" still ;) (x", 0);
        let depth = s.scan_block_comment(b"(;", b";)", 1);
        assert_eq!(depth, 0);
        assert_eq!(s.pos(), 9);
        assert_eq!(s.finish(), vec![Token::new(0, 9, TokenKind::Comment)]);
    }

    #[test]
    fn test_emit_rest() {
        let mut s = Scanner::new("ab ;; c", 5);
        s.set_pos(3);
        s.emit_rest(TokenKind::Comment);
        assert_eq!(s.finish(), vec![Token::new(8, 12, TokenKind::Comment)]);
    }
}
