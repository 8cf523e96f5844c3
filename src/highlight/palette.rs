//! Syntax color palettes
//!
//! A [`Palette`] is passed explicitly to whatever derives styles from it;
//! there is no process-wide current theme.

use crate::error::{Error, Result};
use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Syntax colors for every styled token kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Preset or user-chosen name
    pub name: String,
    /// Keywords and instruction mnemonics
    pub keyword: String,
    /// Call targets
    pub function: String,
    /// Locals, params and sigil references
    pub variable: String,
    /// Globals
    pub variable_special: String,
    /// String literals
    pub string: String,
    /// Numbers and addresses
    pub number: String,
    /// Comments
    pub comment: String,
    /// Value types
    #[serde(rename = "type")]
    pub type_: String,
    /// Operators
    pub operator: String,
    /// Brackets and separators
    pub punctuation: String,
    /// Branch labels
    pub label: String,
}

/// Visual style of one token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style<'a> {
    /// CSS color value
    pub color: &'a str,
    /// Rendered in italics
    pub italic: bool,
}

fn palette(name: &str, colors: [&str; 11]) -> Palette {
    let [
        keyword,
        function,
        variable,
        variable_special,
        string,
        number,
        comment,
        type_,
        operator,
        punctuation,
        label,
    ] = colors.map(String::from);
    Palette {
        name: name.to_string(),
        keyword,
        function,
        variable,
        variable_special,
        string,
        number,
        comment,
        type_,
        operator,
        punctuation,
        label,
    }
}

impl Palette {
    /// Names of the built-in palettes
    pub const PRESETS: [&'static str; 3] = ["darcula", "one_dark_pro", "github_dark"];

    /// JetBrains Darcula
    pub fn darcula() -> Self {
        palette(
            "darcula",
            [
                "#cc7832", "#ffc66d", "#a9b7c6", "#9876aa", "#6a8759", "#6897bb", "#808080",
                "#cc7832", "#a9b7c6", "#a9b7c6", "#bbb529",
            ],
        )
    }

    /// Atom One Dark Pro
    pub fn one_dark_pro() -> Self {
        palette(
            "one_dark_pro",
            [
                "#c678dd", "#61afef", "#e06c75", "#e5c07b", "#98c379", "#d19a66", "#5c6370",
                "#e5c07b", "#56b6c2", "#abb2bf", "#e5c07b",
            ],
        )
    }

    /// GitHub Dark
    pub fn github_dark() -> Self {
        palette(
            "github_dark",
            [
                "#ff7b72", "#d2a8ff", "#ffa657", "#ff7b72", "#a5d6ff", "#79c0ff", "#8b949e",
                "#ff7b72", "#79c0ff", "#c9d1d9", "#d29922",
            ],
        )
    }

    /// Built-in palette by name
    ///
    /// Matching ignores case and treats `-` and spaces like `_`, so
    /// "One Dark Pro" and "one-dark-pro" both resolve.
    pub fn by_name(name: &str) -> Result<Self> {
        let key: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match key.as_str() {
            "darcula" => Ok(Self::darcula()),
            "one_dark_pro" => Ok(Self::one_dark_pro()),
            "github_dark" => Ok(Self::github_dark()),
            _ => Err(Error::UnknownPalette(name.to_string())),
        }
    }

    /// All built-in palettes
    pub fn presets() -> Vec<Palette> {
        vec![Self::darcula(), Self::one_dark_pro(), Self::github_dark()]
    }

    /// Decode a palette from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Color of `kind`, if it is styled at all
    pub fn color_for(&self, kind: TokenKind) -> Option<&str> {
        let color = match kind {
            // Mnemonics read as keywords in every preset
            TokenKind::Keyword | TokenKind::Instruction => &self.keyword,
            TokenKind::Type => &self.type_,
            TokenKind::Function => &self.function,
            TokenKind::Variable => &self.variable,
            TokenKind::SpecialVariable => &self.variable_special,
            TokenKind::String => &self.string,
            TokenKind::Number => &self.number,
            TokenKind::Comment => &self.comment,
            TokenKind::Label => &self.label,
            TokenKind::Punctuation => &self.punctuation,
            TokenKind::Operator => &self.operator,
            TokenKind::Unclassified => return None,
        };
        Some(color)
    }

    /// Style of `kind`; `None` for unstyled kinds
    pub fn style_for(&self, kind: TokenKind) -> Option<Style<'_>> {
        self.color_for(kind).map(|color| Style {
            color,
            italic: kind == TokenKind::Comment,
        })
    }

    /// CSS rules for every styled kind, one `.tok-*` rule per line
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for kind in TokenKind::ALL {
            if let Some(style) = self.style_for(kind) {
                let _ = write!(css, ".{} {{ color: {};", kind.class_name(), style.color);
                if style.italic {
                    css.push_str(" font-style: italic;");
                }
                css.push_str(" }\n");
            }
        }
        css
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::darcula()
    }
}
