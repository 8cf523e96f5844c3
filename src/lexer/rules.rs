//! Declarative word classification
//!
//! Each dialect classifies bare words through a [`RuleTable`]: an ordered list
//! of `(matcher, kind, priority)` rules. Rules are sorted by priority
//! (descending, stable) when the table is built and the first match wins, so
//! the tie-break order keyword > type > instruction > fallback lives in data
//! rather than in scanner control flow.

use super::vocab::Vocabulary;
use crate::token::TokenKind;
use regex::Regex;

/// Priority of keyword rules
pub const KEYWORD_PRIORITY: i32 = 300;
/// Priority of type rules
pub const TYPE_PRIORITY: i32 = 200;
/// Priority of instruction rules
pub const INSTRUCTION_PRIORITY: i32 = 100;
/// Priority of shape-based rules (`v0`, `global3`, `L2`)
pub const PATTERN_PRIORITY: i32 = 50;
/// Priority of the call-site rule
pub const CALL_PRIORITY: i32 = 10;

/// How a rule recognizes a word
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Exact membership in a fixed vocabulary
    Vocabulary(&'static Vocabulary),
    /// Whole-word regular expression; must be anchored
    Pattern(&'static str),
    /// Word followed by optional blanks and an opening paren
    CallSite,
}

/// A single classification rule, as declared by a dialect
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// What the rule matches
    pub matcher: Matcher,
    /// Kind assigned on match
    pub kind: TokenKind,
    /// Higher wins
    pub priority: i32,
}

impl RuleDef {
    /// Vocabulary membership rule
    pub const fn vocabulary(set: &'static Vocabulary, kind: TokenKind, priority: i32) -> Self {
        Self {
            matcher: Matcher::Vocabulary(set),
            kind,
            priority,
        }
    }

    /// Anchored regex rule
    pub const fn pattern(pattern: &'static str, kind: TokenKind, priority: i32) -> Self {
        Self {
            matcher: Matcher::Pattern(pattern),
            kind,
            priority,
        }
    }

    /// Call-site lookahead rule
    pub const fn call_site(kind: TokenKind, priority: i32) -> Self {
        Self {
            matcher: Matcher::CallSite,
            kind,
            priority,
        }
    }
}

/// Compiled form of a [`Matcher`]
#[derive(Debug)]
enum CompiledMatcher {
    Vocabulary(&'static Vocabulary),
    Pattern(Regex),
    CallSite,
}

#[derive(Debug)]
struct CompiledRule {
    matcher: CompiledMatcher,
    kind: TokenKind,
    priority: i32,
}

impl CompiledRule {
    #[inline]
    fn matches(&self, word: &str, rest: &[u8]) -> bool {
        match &self.matcher {
            CompiledMatcher::Vocabulary(set) => set.contains(word),
            CompiledMatcher::Pattern(re) => re.is_match(word),
            CompiledMatcher::CallSite => is_call_site(rest),
        }
    }
}

/// `rest` starts right after the word: skip spaces/tabs, expect `(`
#[inline]
fn is_call_site(rest: &[u8]) -> bool {
    rest.iter()
        .find(|&&b| b != b' ' && b != b'\t')
        .is_some_and(|&b| b == b'(')
}

/// Ordered, compiled rule table for one dialect
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<CompiledRule>,
    fallback: TokenKind,
}

impl RuleTable {
    /// Compile rule definitions into a table
    ///
    /// Rules with invalid patterns are skipped; the remaining rules keep
    /// their relative order among equal priorities.
    pub fn new(definitions: &[RuleDef], fallback: TokenKind) -> Self {
        let mut rules: Vec<CompiledRule> = definitions
            .iter()
            .filter_map(|def| {
                let matcher = match def.matcher {
                    Matcher::Vocabulary(set) => CompiledMatcher::Vocabulary(set),
                    Matcher::CallSite => CompiledMatcher::CallSite,
                    Matcher::Pattern(pattern) => match Regex::new(pattern) {
                        Ok(re) => CompiledMatcher::Pattern(re),
                        Err(_e) => {
                            log_debug!("skipping word rule with invalid pattern {:?}: {}", pattern, _e);
                            return None;
                        }
                    },
                };
                Some(CompiledRule {
                    matcher,
                    kind: def.kind,
                    priority: def.priority,
                })
            })
            .collect();

        // Sort by priority (descending) so higher priority rules are checked first
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));

        Self { rules, fallback }
    }

    /// Classify `word`; `rest` is the line text following it
    #[inline]
    pub fn classify(&self, word: &str, rest: &[u8]) -> TokenKind {
        self.rules
            .iter()
            .find(|rule| rule.matches(word, rest))
            .map_or(self.fallback, |rule| rule.kind)
    }

    /// Number of compiled rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Kinds in evaluation order, for inspecting the tie-break order
    pub fn kinds_in_order(&self) -> Vec<TokenKind> {
        self.rules.iter().map(|r| r.kind).collect()
    }
}
