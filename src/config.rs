//! Host-supplied settings
//!
//! Both structs decode from the camelCase JSON the frontend stores, with every
//! field optional.
//!
//! # Example
//!
//! ```rust
//! use wasmspy_core::config::{HighlightConfig, SyncConfig};
//!
//! let highlight = HighlightConfig::new().with_decorate_unclassified(true);
//! let sync = SyncConfig::from_json(r#"{"syncScroll": false}"#).unwrap();
//! assert!(highlight.decorate_unclassified);
//! assert!(sync.sync_selection && !sync.sync_scroll);
//! ```

use crate::error::Result;
use crate::highlight::Palette;
use serde::{Deserialize, Serialize};

/// Settings for building decoration sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightConfig {
    /// Keep `Unclassified` tokens as (unstyled) decorations
    pub decorate_unclassified: bool,

    /// Colors the stylesheet is generated from
    pub palette: Palette,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            decorate_unclassified: false,
            palette: Palette::default(),
        }
    }
}

impl HighlightConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unclassified tokens are decorated
    pub fn with_decorate_unclassified(mut self, decorate: bool) -> Self {
        self.decorate_unclassified = decorate;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Decode from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Which interactions are mirrored between the pseudocode and disassembly views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncConfig {
    /// Mirror selections across views
    pub sync_selection: bool,

    /// Scroll the other view to the corresponding line
    pub sync_scroll: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            sync_selection: true,
            sync_scroll: true,
        }
    }
}

impl SyncConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set selection mirroring
    pub fn with_sync_selection(mut self, enabled: bool) -> Self {
        self.sync_selection = enabled;
        self
    }

    /// Set scroll synchronization
    pub fn with_sync_scroll(mut self, enabled: bool) -> Self {
        self.sync_scroll = enabled;
        self
    }

    /// Decode from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let h = HighlightConfig::default();
        assert!(!h.decorate_unclassified);
        assert_eq!(h.palette.name, "darcula");
        let s = SyncConfig::default();
        assert!(s.sync_selection);
        assert!(s.sync_scroll);
    }

    #[test]
    fn test_builders() {
        let s = SyncConfig::new().with_sync_selection(false).with_sync_scroll(false);
        assert_eq!(
            s,
            SyncConfig {
                sync_selection: false,
                sync_scroll: false
            }
        );
        let h = HighlightConfig::new().with_palette(Palette::github_dark());
        assert_eq!(h.palette.name, "github_dark");
    }

    #[test]
    fn test_from_json_partial() {
        let h = HighlightConfig::from_json(r#"{"decorateUnclassified": true}"#).unwrap();
        assert!(h.decorate_unclassified);
        assert_eq!(h.palette, Palette::default());

        let s = SyncConfig::from_json("{}").unwrap();
        assert_eq!(s, SyncConfig::default());

        assert!(SyncConfig::from_json("[").is_err());
    }

    #[test]
    fn test_from_json_with_palette() {
        let json = format!(
            r#"{{"palette": {}}}"#,
            serde_json::to_string(&Palette::one_dark_pro()).unwrap()
        );
        let h = HighlightConfig::from_json(&json).unwrap();
        assert_eq!(h.palette, Palette::one_dark_pro());
    }
}
