//! Cross-view position mapping
//!
//! The decompiler reports, for each pseudocode line, the byte offsets of the
//! instructions it was produced from. The disassembly listing pairs each of
//! its lines with exactly one instruction offset. Composing the two relates
//! any pseudocode line to disassembly lines and back.
//!
//! - [`MappingIndex`] - pseudocode line ↔ instruction offsets
//! - [`DisasmMapping`] - disassembly line ↔ instruction offset
//! - [`CrossView`] - both, gated by [`SyncConfig`](crate::config::SyncConfig)

pub mod cross_view;
pub mod disasm;
pub mod line_index;

pub use cross_view::CrossView;
pub use disasm::DisasmMapping;
pub use line_index::MappingIndex;

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the decompiler's line table
///
/// ```json
/// {"line": 3, "offsets": [18, 20]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMapping {
    /// 1-based pseudocode line
    pub line: usize,
    /// Instruction byte offsets; `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub offsets: Vec<u64>,
}

impl LineMapping {
    /// Create a new row
    pub fn new(line: usize, offsets: impl Into<Vec<u64>>) -> Self {
        Self {
            line,
            offsets: offsets.into(),
        }
    }
}

/// Full decompiler output for one function
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompileResult {
    /// Pseudocode text
    #[serde(default)]
    pub code: String,
    /// Line table; `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mappings: Vec<LineMapping>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_mapping_json() {
        let m: LineMapping = serde_json::from_str(r#"{"line": 3, "offsets": [18, 20]}"#).unwrap();
        assert_eq!(m, LineMapping::new(3, vec![18, 20]));

        let m: LineMapping = serde_json::from_str(r#"{"line": 1, "offsets": null}"#).unwrap();
        assert!(m.offsets.is_empty());

        let m: LineMapping = serde_json::from_str(r#"{"line": 1}"#).unwrap();
        assert!(m.offsets.is_empty());
    }

    #[test]
    fn test_decompile_result_json() {
        let r: DecompileResult = serde_json::from_str(
            r#"{"code": "func f() {\n}", "mappings": [{"line": 1, "offsets": [0]}]}"#,
        )
        .unwrap();
        assert_eq!(r.mappings.len(), 1);
        assert!(r.code.starts_with("func"));

        let r: DecompileResult = serde_json::from_str(r#"{"code": "", "mappings": null}"#).unwrap();
        assert!(r.mappings.is_empty());
    }
}
