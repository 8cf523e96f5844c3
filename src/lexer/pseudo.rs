//! Decompiled pseudocode dialect
//!
//! ```text
//! func add(p0: i32, p1: i32) -> i32 {   // signature
//!   v0 = p0 + p1                        ; trailing comment
//!   if (v0 > 0x10) { br L0 }
//!   global1 = helper(v0, -1)
//! }
//! ```

use super::rules::{
    RuleDef, RuleTable, CALL_PRIORITY, INSTRUCTION_PRIORITY, KEYWORD_PRIORITY, PATTERN_PRIORITY,
    TYPE_PRIORITY,
};
use super::scanner::{NumberSyntax, Scanner};
use super::vocab;
use crate::token::{Token, TokenKind};
use std::sync::OnceLock;

static RULES: OnceLock<RuleTable> = OnceLock::new();

/// Word rules for pseudocode
pub fn rules() -> &'static RuleTable {
    RULES.get_or_init(|| {
        RuleTable::new(
            &[
                RuleDef::vocabulary(vocab::pseudo_keywords(), TokenKind::Keyword, KEYWORD_PRIORITY),
                RuleDef::vocabulary(vocab::pseudo_types(), TokenKind::Type, TYPE_PRIORITY),
                RuleDef::vocabulary(
                    vocab::pseudo_instructions(),
                    TokenKind::Instruction,
                    INSTRUCTION_PRIORITY,
                ),
                RuleDef::pattern(r"^L\d+$", TokenKind::Label, PATTERN_PRIORITY),
                RuleDef::pattern(r"^[vp]\d+$", TokenKind::Variable, PATTERN_PRIORITY),
                RuleDef::pattern(r"^global\d+$", TokenKind::SpecialVariable, PATTERN_PRIORITY),
                RuleDef::call_site(TokenKind::Function, CALL_PRIORITY),
            ],
            TokenKind::Unclassified,
        )
    })
}

/// Tokenize one line of pseudocode
pub fn tokenize_pseudo(text: &str, line_offset_base: usize) -> Vec<Token> {
    let rules = rules();
    let mut s = Scanner::new(text, line_offset_base);

    while let Some(b) = s.peek() {
        if s.skip_whitespace() {
            continue;
        }
        if b == b';' || s.starts_with(b"//") {
            s.emit_rest(TokenKind::Comment);
            break;
        }
        if b == b'"' {
            s.scan_string();
            continue;
        }
        if s.scan_number(NumberSyntax::PLAIN) || s.scan_word(rules) || s.scan_operators(b"//") {
            continue;
        }
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
        tokenize_pseudo(text, 0)
            .into_iter()
            .map(|t| (t.text(text), t.kind))
            .collect()
    }

    #[test]
    fn test_call_scenario() {
        assert_eq!(
            classify("call foo(1, 2)"),
            vec![
                ("call", TokenKind::Unclassified),
                ("foo", TokenKind::Function),
                ("(", TokenKind::Punctuation),
                ("1", TokenKind::Number),
                (",", TokenKind::Punctuation),
                ("2", TokenKind::Number),
                (")", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_call_with_space_before_paren() {
        assert_eq!(classify("call (x)")[0], ("call", TokenKind::Function));
    }

    #[test]
    fn test_keyword_beats_instruction() {
        assert_eq!(classify("loop"), vec![("loop", TokenKind::Keyword)]);
        assert_eq!(classify("br_if"), vec![("br_if", TokenKind::Keyword)]);
    }

    #[test]
    fn test_keyword_beats_call_site() {
        assert_eq!(classify("switch (v0)")[0], ("switch", TokenKind::Keyword));
        assert_eq!(classify("if(v0)")[0], ("if", TokenKind::Keyword));
    }

    #[test]
    fn test_type_and_instruction_before_call_site() {
        assert_eq!(classify("i64(v0)")[0], ("i64", TokenKind::Type));
        assert_eq!(
            classify("i32.wrap_i64(v0)")[0],
            ("i32.wrap_i64", TokenKind::Instruction)
        );
    }

    #[test]
    fn test_variables_and_globals() {
        assert_eq!(
            classify("v0 = p1 + global3"),
            vec![
                ("v0", TokenKind::Variable),
                ("=", TokenKind::Operator),
                ("p1", TokenKind::Variable),
                ("+", TokenKind::Operator),
                ("global3", TokenKind::SpecialVariable),
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            classify("L12: br L3"),
            vec![
                ("L12", TokenKind::Label),
                (":", TokenKind::Punctuation),
                ("br", TokenKind::Keyword),
                ("L3", TokenKind::Label),
            ]
        );
        assert_eq!(classify("L1x")[0], ("L1x", TokenKind::Unclassified));
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            classify("v0 = 1 // note"),
            vec![
                ("v0", TokenKind::Variable),
                ("=", TokenKind::Operator),
                ("1", TokenKind::Number),
                ("// note", TokenKind::Comment),
            ]
        );
        assert_eq!(classify("; whole line"), vec![("; whole line", TokenKind::Comment)]);
    }

    #[test]
    fn test_numbers_and_minus() {
        assert_eq!(classify("0x1F"), vec![("0x1F", TokenKind::Number)]);
        assert_eq!(classify("-5"), vec![("-5", TokenKind::Number)]);
        assert_eq!(
            classify("-v0"),
            vec![("-", TokenKind::Operator), ("v0", TokenKind::Variable)]
        );
        assert_eq!(classify("1.5"), vec![("1.5", TokenKind::Number)]);
    }

    #[test]
    fn test_arrow_operator() {
        assert_eq!(
            classify("func f() -> i32 {"),
            vec![
                ("func", TokenKind::Keyword),
                ("f", TokenKind::Function),
                ("(", TokenKind::Punctuation),
                (")", TokenKind::Punctuation),
                ("->", TokenKind::Operator),
                ("i32", TokenKind::Type),
                ("{", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(
            classify(r#"log("a \"b\"")"#),
            vec![
                ("log", TokenKind::Function),
                ("(", TokenKind::Punctuation),
                (r#""a \"b\"""#, TokenKind::String),
                (")", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn test_offsets_are_absolute() {
        let tokens = tokenize_pseudo("return v0", 100);
        assert_eq!(tokens[0], Token::new(100, 106, TokenKind::Keyword));
        assert_eq!(tokens[1], Token::new(107, 109, TokenKind::Variable));
    }

    #[test]
    fn test_unknown_bytes_are_skipped() {
        assert_eq!(classify("@ # é"), vec![]);
    }
}
