//! Disassembly listing dialect
//!
//! ```text
//! ; Function 3: add
//! ; Params: 2, Results: 1
//! 00000012: local.get 0
//! 00000014: br_table [0 1] 2 ; dispatch
//! 00000018: i32.load offset=4
//! ```

use super::char_class::CHAR_CLASSES;
use super::rules::{RuleDef, RuleTable, INSTRUCTION_PRIORITY, KEYWORD_PRIORITY, TYPE_PRIORITY};
use super::scanner::{NumberSyntax, Scanner};
use super::vocab;
use crate::token::{Token, TokenKind};
use std::sync::OnceLock;

static RULES: OnceLock<RuleTable> = OnceLock::new();

/// Word rules for disassembly listings
pub fn rules() -> &'static RuleTable {
    RULES.get_or_init(|| {
        RuleTable::new(
            &[
                RuleDef::vocabulary(vocab::wat_keywords(), TokenKind::Keyword, KEYWORD_PRIORITY),
                RuleDef::vocabulary(vocab::wat_types(), TokenKind::Type, TYPE_PRIORITY),
                RuleDef::vocabulary(
                    vocab::instructions(),
                    TokenKind::Instruction,
                    INSTRUCTION_PRIORITY,
                ),
            ],
            TokenKind::Unclassified,
        )
    })
}

/// Length of a leading `[0-9a-fA-F]+:` address prefix, excluding the colon
pub fn address_prefix_len(text: &str) -> Option<usize> {
    let digits = text
        .bytes()
        .take_while(|&b| CHAR_CLASSES.is_hex_digit(b))
        .count();
    (digits > 0 && text.as_bytes().get(digits) == Some(&b':')).then_some(digits)
}

/// Tokenize one line of a disassembly listing
pub fn tokenize_disasm(text: &str, line_offset_base: usize) -> Vec<Token> {
    let rules = rules();
    let mut s = Scanner::new(text, line_offset_base);

    // Header and annotation lines are comments in their entirety
    if text.trim_start().starts_with(';') {
        s.set_pos(text.len() - text.trim_start().len());
        s.emit_rest(TokenKind::Comment);
        return s.finish();
    }

    if let Some(digits) = address_prefix_len(text) {
        s.emit_range(0, digits, TokenKind::Number);
        s.set_pos(digits + 1);
    }

    while let Some(b) = s.peek() {
        if s.skip_whitespace() {
            continue;
        }
        if b == b';' {
            s.emit_rest(TokenKind::Comment);
            break;
        }
        if b == b'"' {
            s.scan_string();
            continue;
        }
        if s.scan_number(NumberSyntax::PLAIN) || s.scan_word(rules) || s.scan_operators(b"") {
            continue;
        }
        // `;` never gets here: it opened the trailing comment above
        if s.scan_punct(|_| true) {
            continue;
        }
        s.bump();
    }

    s.finish()
}
