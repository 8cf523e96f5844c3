//! Errors at the crate's interchange boundaries
//!
//! Tokenizing, highlighting and index construction never fail. Only decoding
//! collaborator input (JSON mapping tables, palettes, settings) and resolving
//! names supplied by the host (dialects, palettes) can go wrong.

use std::fmt;

/// Result alias used by the fallible entry points of this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error produced when decoding or resolving host-supplied input
#[derive(Debug)]
pub enum Error {
    /// JSON input could not be decoded
    Json(serde_json::Error),
    /// Dialect name not recognized
    UnknownDialect(String),
    /// Palette name not recognized
    UnknownPalette(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(e) => write!(f, "Invalid JSON: {}", e),
            Error::UnknownDialect(name) => write!(
                f,
                "Unknown dialect '{}' (expected one of: decompile, disasm, wat)",
                name
            ),
            Error::UnknownPalette(name) => write!(f, "Unknown palette: {}", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
