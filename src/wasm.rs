//! WASM bindings for the frontend
//!
//! When compiled with the `wasm` feature, this exposes `tokenizeLine`,
//! `highlight` and a `WasmMappingIndex` class to JavaScript.

use crate::config::HighlightConfig;
use crate::highlight::{DecorationSet, Document};
use crate::lexer::Dialect;
use crate::mapping::{CrossView, DisasmMapping, MappingIndex};
use crate::token::Token;
use js_sys::{Array, JsString, Object, Reflect};
use wasm_bindgen::prelude::*;

fn to_js_error(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a token to `{from, to, kind}`
fn token_to_js(tok: &Token) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &JsString::from("from").into(), &JsValue::from_f64(tok.from as f64))?;
    Reflect::set(&obj, &JsString::from("to").into(), &JsValue::from_f64(tok.to as f64))?;
    Reflect::set(&obj, &JsString::from("kind").into(), &JsString::from(tok.kind.name()).into())?;
    Ok(obj.into())
}

/// Tokenize one line
///
/// # Arguments
/// * `dialect` - `decompile`, `disasm` or `wat`
/// * `text` - Line text without its terminator
/// * `base` - Document offset of the line start
///
/// # Returns
/// An array of `{from, to, kind}` objects
///
/// # Throws
/// If the dialect name is unknown
#[wasm_bindgen(js_name = tokenizeLine)]
pub fn tokenize_line(dialect: &str, text: &str, base: u32) -> Result<Array, JsValue> {
    let dialect: Dialect = dialect.parse().map_err(to_js_error)?;
    let arr = Array::new();
    for tok in dialect.tokenize(text, base as usize) {
        arr.push(&token_to_js(&tok)?);
    }
    Ok(arr)
}

/// Highlight a whole document and return HTML
///
/// # Arguments
/// * `dialect` - `decompile`, `disasm` or `wat`
/// * `text` - Document text
/// * `config_json` - Optional highlight settings as JSON
///
/// # Throws
/// If the dialect is unknown or the settings JSON is invalid
#[wasm_bindgen]
pub fn highlight(dialect: &str, text: &str, config_json: Option<String>) -> Result<String, JsValue> {
    let dialect: Dialect = dialect.parse().map_err(to_js_error)?;
    let config = match config_json {
        Some(json) => HighlightConfig::from_json(&json).map_err(to_js_error)?,
        None => HighlightConfig::default(),
    };
    let doc = Document::new(text);
    Ok(DecorationSet::build(&doc, dialect, &config).to_html(&doc))
}

/// Stylesheet for a built-in palette
///
/// # Throws
/// If the palette name is unknown
#[wasm_bindgen]
pub fn stylesheet(palette: &str) -> Result<String, JsValue> {
    crate::highlight::Palette::by_name(palette)
        .map(|p| p.stylesheet())
        .map_err(to_js_error)
}

/// Mapping index instance
///
/// Create with `new WasmMappingIndex(mappingsJson)`.
#[wasm_bindgen]
pub struct WasmMappingIndex {
    view: CrossView,
}

#[wasm_bindgen]
impl WasmMappingIndex {
    /// Create from the decompiler's mapping JSON
    ///
    /// # Throws
    /// If the JSON is invalid
    #[wasm_bindgen(constructor)]
    pub fn new(mappings_json: &str) -> Result<WasmMappingIndex, JsValue> {
        let pseudo = MappingIndex::from_json(mappings_json).map_err(to_js_error)?;
        Ok(WasmMappingIndex {
            view: CrossView {
                pseudo,
                ..CrossView::default()
            },
        })
    }

    /// Attach the disassembly listing the offsets refer to
    #[wasm_bindgen(js_name = setListing)]
    pub fn set_listing(&mut self, listing: &str) {
        self.view.disasm = DisasmMapping::from_listing(listing);
    }

    /// Offsets owned by a pseudocode line
    #[wasm_bindgen(js_name = offsetsForLine)]
    pub fn offsets_for_line(&self, line: u32) -> Vec<u64> {
        self.view.pseudo.offsets_for_line(line as usize).to_vec()
    }

    /// Pseudocode line owning an offset, or `undefined`
    #[wasm_bindgen(js_name = lineForOffset)]
    pub fn line_for_offset(&self, offset: u64) -> Option<u32> {
        self.view.pseudo.line_for_offset(offset).map(|l| l as u32)
    }

    /// Listing lines behind a pseudocode line
    #[wasm_bindgen(js_name = disasmLinesFor)]
    pub fn disasm_lines_for(&self, line: u32) -> Vec<u32> {
        self.view
            .disasm_lines_for(line as usize)
            .into_iter()
            .map(|l| l as u32)
            .collect()
    }

    /// Pseudocode line for a listing line, or `undefined`
    #[wasm_bindgen(js_name = pseudoLineFor)]
    pub fn pseudo_line_for(&self, disasm_line: u32) -> Option<u32> {
        self.view.pseudo_line_for(disasm_line as usize).map(|l| l as u32)
    }
}

/// Initialize function for WASM
#[wasm_bindgen]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}
