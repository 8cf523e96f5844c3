//! WebAssembly text format dialect
//!
//! ```text
//! (module
//!   (func $add (param $a i32) (param $b i32) (result i32)
//!     local.get $a   ;; first operand
//!     local.get $b
//!     i32.add)
//!   (; block (; nested ;) comment ;)
//! )
//! ```

use super::rules::{RuleDef, RuleTable, INSTRUCTION_PRIORITY, KEYWORD_PRIORITY, TYPE_PRIORITY};
use super::scanner::{NumberSyntax, Scanner};
use super::vocab;
use super::LineState;
use crate::token::{Token, TokenKind};
use std::sync::OnceLock;

const BLOCK_OPEN: &[u8; 2] = b"(;";
const BLOCK_CLOSE: &[u8; 2] = b";)";

static RULES: OnceLock<RuleTable> = OnceLock::new();

/// Word rules for the text format
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

/// Tokenize one line of the text format
///
/// Block comments left open at the end of the line simply end there; use
/// [`tokenize_wat_with_state`] to carry them onto following lines.
pub fn tokenize_wat(text: &str, line_offset_base: usize) -> Vec<Token> {
    tokenize_wat_with_state(text, line_offset_base, &mut LineState::default())
}

/// Tokenize one line, continuing and updating an open block comment
pub fn tokenize_wat_with_state(
    text: &str,
    line_offset_base: usize,
    state: &mut LineState,
) -> Vec<Token> {
    let rules = rules();
    let mut s = Scanner::new(text, line_offset_base);

    if state.block_comment_depth > 0 {
        state.block_comment_depth =
            s.scan_block_comment(BLOCK_OPEN, BLOCK_CLOSE, state.block_comment_depth);
    }

    while let Some(b) = s.peek() {
        if s.skip_whitespace() {
            continue;
        }
        if s.starts_with(b";;") {
            s.emit_rest(TokenKind::Comment);
            break;
        }
        if s.starts_with(BLOCK_OPEN) {
            state.block_comment_depth = s.scan_block_comment(BLOCK_OPEN, BLOCK_CLOSE, 0);
            continue;
        }
        if b == b'"' {
            s.scan_string();
            continue;
        }
        if s.scan_sigil(b'$') || s.scan_number(NumberSyntax::EXTENDED) {
            continue;
        }
        if s.scan_word(rules) || s.scan_operators(b"") {
            continue;
        }
        // Comment openers were handled above, so a `(` or `;` here is structural
        if s.scan_punct(|_| true) {
            continue;
        }
        s.bump();
    }

    s.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Vec<(&str, TokenKind)> {
        tokenize_wat(text, 0)
            .into_iter()
            .map(|t| (t.text(text), t.kind))
            .collect()
    }

    #[test]
    fn test_sigil_variable() {
        assert_eq!(classify("$my_var"), vec![("$my_var", TokenKind::Variable)]);
    }

    #[test]
    fn test_trailing_line_comment() {
        assert_eq!(
            classify("i32.add ;; trailing note"),
            vec![
                ("i32.add", TokenKind::Instruction),
                (";; trailing note", TokenKind::Comment),
            ]
        );
    }

    #[test]
    fn test_func_header() {
        assert_eq!(
            classify("(func $add (param $a i32) (result i32)"),
            vec![
                ("(", TokenKind::Punctuation),
                ("func", TokenKind::Keyword),
                ("$add", TokenKind::Variable),
                ("(", TokenKind::Punctuation),
                ("param", TokenKind::Keyword),
                ("$a", TokenKind::Variable),
                ("i32", TokenKind::Type),
                (")", TokenKind::Punctuation),
                ("(", TokenKind::Punctuation),
                ("result", TokenKind::Keyword),
                ("i32", TokenKind::Type),
                (")", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(
            classify("(; a (; b ;) c ;) nop"),
            vec![
                ("(; a (; b ;) c ;)", TokenKind::Comment),
                ("nop", TokenKind::Instruction),
            ]
        );
    }

    #[test]
    fn test_block_comment_carries_across_lines() {
        let mut state = LineState::default();
        let first = tokenize_wat_with_state("nop (; open", 0, &mut state);
        assert_eq!(state.block_comment_depth, 1);
        assert_eq!(first.last().map(|t| t.kind), Some(TokenKind::Comment));

        let second = tokenize_wat_with_state("still ;) drop", 20, &mut state);
        assert_eq!(state.block_comment_depth, 0);
        assert_eq!(
            second,
            vec![
                Token::new(20, 28, TokenKind::Comment),
                Token::new(29, 33, TokenKind::Instruction),
            ]
        );
    }

    #[test]
    fn test_stateless_entry_point_closes_at_eol() {
        assert_eq!(classify("(; open"), vec![("(; open", TokenKind::Comment)]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            classify("i64.const -0x7f_ff"),
            vec![
                ("i64.const", TokenKind::Instruction),
                ("-0x7f_ff", TokenKind::Number),
            ]
        );
        assert_eq!(classify("f64.const 1.5e-3")[1], ("1.5e-3", TokenKind::Number));
        assert_eq!(classify("1_000")[0], ("1_000", TokenKind::Number));
    }

    #[test]
    fn test_hex_prefix_without_digits() {
        assert_eq!(
            classify("-0x"),
            vec![("-0", TokenKind::Number), ("x", TokenKind::Unclassified)]
        );
        assert_eq!(
            classify("0x"),
            vec![("0", TokenKind::Number), ("x", TokenKind::Unclassified)]
        );
    }

    #[test]
    fn test_lone_sigil_emits_nothing() {
        assert_eq!(classify("$ nop"), vec![("nop", TokenKind::Instruction)]);
    }

    #[test]
    fn test_operators_and_punctuation() {
        assert_eq!(
            classify("-x"),
            vec![("-", TokenKind::Operator), ("x", TokenKind::Unclassified)]
        );
        assert_eq!(
            classify("(i32.add) [x] {y}: , ="),
            vec![
                ("(", TokenKind::Punctuation),
                ("i32.add", TokenKind::Instruction),
                (")", TokenKind::Punctuation),
                ("[", TokenKind::Punctuation),
                ("x", TokenKind::Unclassified),
                ("]", TokenKind::Punctuation),
                ("{", TokenKind::Punctuation),
                ("y", TokenKind::Unclassified),
                ("}", TokenKind::Punctuation),
                (":", TokenKind::Punctuation),
                (",", TokenKind::Punctuation),
                ("=", TokenKind::Operator),
            ]
        );
    }

    #[test]
    fn test_single_semicolon_is_punctuation() {
        assert_eq!(
            classify("nop ; drop"),
            vec![
                ("nop", TokenKind::Instruction),
                (";", TokenKind::Punctuation),
                ("drop", TokenKind::Instruction),
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            classify(r#"(export "main" (func 0))"#)[2],
            (r#""main""#, TokenKind::String)
        );
        assert_eq!(classify(r#"(data "\"abc"#)[2], (r#""\"abc"#, TokenKind::String));
    }

    #[test]
    fn test_unknown_word_is_unclassified() {
        assert_eq!(classify("frobnicate"), vec![("frobnicate", TokenKind::Unclassified)]);
    }

    #[test]
    fn test_comment_marker_inside_string_is_not_comment() {
        assert_eq!(
            classify(r#""a;;b" nop"#),
            vec![(r#""a;;b""#, TokenKind::String), ("nop", TokenKind::Instruction)]
        );
    }
}
