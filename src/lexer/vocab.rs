//! Fixed word vocabularies for the three dialects
//!
//! Sets are built once on first use and shared by all tokenizer calls.

use hashbrown::HashSet;
use std::sync::OnceLock;

/// An immutable set of words
pub type Vocabulary = HashSet<&'static str>;

/// Text format structural keywords
pub const WAT_KEYWORDS: &[&str] = &[
    "module", "func", "param", "result", "local", "global", "table", "memory", "export", "import",
    "type", "data", "elem", "start", "offset", "mut",
];

/// Value and reference types
pub const WAT_TYPES: &[&str] = &["i32", "i64", "f32", "f64", "funcref", "externref", "v128"];

/// Control instructions that the decompiler also prints as bare words
pub const CONTROL_INSTRUCTIONS: &[&str] = &[
    "unreachable", "nop", "block", "loop", "if", "else", "end", "br", "br_if", "br_table",
    "return",
];

/// Instruction mnemonics of the MVP instruction set
pub const INSTRUCTIONS: &[&str] = &[
    // control
    "unreachable", "nop", "block", "loop", "if", "else", "end", "br", "br_if", "br_table",
    "return", "call", "call_indirect",
    // parametric
    "drop", "select",
    // variable
    "local.get", "local.set", "local.tee", "global.get", "global.set",
    // memory
    "i32.load", "i64.load", "f32.load", "f64.load", "i32.load8_s", "i32.load8_u",
    "i32.load16_s", "i32.load16_u", "i64.load8_s", "i64.load8_u", "i64.load16_s",
    "i64.load16_u", "i64.load32_s", "i64.load32_u", "i32.store", "i64.store", "f32.store",
    "f64.store", "i32.store8", "i32.store16", "i64.store8", "i64.store16", "i64.store32",
    "memory.size", "memory.grow",
    // constants
    "i32.const", "i64.const", "f32.const", "f64.const",
    // comparison
    "i32.eqz", "i32.eq", "i32.ne", "i32.lt_s", "i32.lt_u", "i32.gt_s", "i32.gt_u", "i32.le_s",
    "i32.le_u", "i32.ge_s", "i32.ge_u", "i64.eqz", "i64.eq", "i64.ne", "i64.lt_s", "i64.lt_u",
    "i64.gt_s", "i64.gt_u", "i64.le_s", "i64.le_u", "i64.ge_s", "i64.ge_u", "f32.eq", "f32.ne",
    "f32.lt", "f32.gt", "f32.le", "f32.ge", "f64.eq", "f64.ne", "f64.lt", "f64.gt", "f64.le",
    "f64.ge",
    // integer arithmetic
    "i32.clz", "i32.ctz", "i32.popcnt", "i32.add", "i32.sub", "i32.mul", "i32.div_s",
    "i32.div_u", "i32.rem_s", "i32.rem_u", "i32.and", "i32.or", "i32.xor", "i32.shl",
    "i32.shr_s", "i32.shr_u", "i32.rotl", "i32.rotr", "i64.clz", "i64.ctz", "i64.popcnt",
    "i64.add", "i64.sub", "i64.mul", "i64.div_s", "i64.div_u", "i64.rem_s", "i64.rem_u",
    "i64.and", "i64.or", "i64.xor", "i64.shl", "i64.shr_s", "i64.shr_u", "i64.rotl",
    "i64.rotr",
    // float arithmetic
    "f32.abs", "f32.neg", "f32.ceil", "f32.floor", "f32.trunc", "f32.nearest", "f32.sqrt",
    "f32.add", "f32.sub", "f32.mul", "f32.div", "f32.min", "f32.max", "f32.copysign",
    "f64.abs", "f64.neg", "f64.ceil", "f64.floor", "f64.trunc", "f64.nearest", "f64.sqrt",
    "f64.add", "f64.sub", "f64.mul", "f64.div", "f64.min", "f64.max", "f64.copysign",
    // conversions
    "i32.wrap_i64", "i32.trunc_f32_s", "i32.trunc_f32_u", "i32.trunc_f64_s",
    "i32.trunc_f64_u", "i64.extend_i32_s", "i64.extend_i32_u", "i64.trunc_f32_s",
    "i64.trunc_f32_u", "i64.trunc_f64_s", "i64.trunc_f64_u", "f32.convert_i32_s",
    "f32.convert_i32_u", "f32.convert_i64_s", "f32.convert_i64_u", "f32.demote_f64",
    "f64.convert_i32_s", "f64.convert_i32_u", "f64.convert_i64_s", "f64.convert_i64_u",
    "f64.promote_f32",
    // reinterpretations
    "i32.reinterpret_f32", "i64.reinterpret_f64", "f32.reinterpret_i32",
    "f64.reinterpret_i64",
];

/// Pseudocode structural keywords
pub const PSEUDO_KEYWORDS: &[&str] = &[
    "func", "if", "else", "switch", "case", "break", "return", "loop", "block", "br", "br_if",
    "unreachable", "nop", "default", "mem",
];

/// Pseudocode value types
pub const PSEUDO_TYPES: &[&str] = &["i32", "i64", "f32", "f64", "v128"];

static WAT_KEYWORD_SET: OnceLock<Vocabulary> = OnceLock::new();
static WAT_TYPE_SET: OnceLock<Vocabulary> = OnceLock::new();
static INSTRUCTION_SET: OnceLock<Vocabulary> = OnceLock::new();
static PSEUDO_KEYWORD_SET: OnceLock<Vocabulary> = OnceLock::new();
static PSEUDO_TYPE_SET: OnceLock<Vocabulary> = OnceLock::new();
static PSEUDO_INSTRUCTION_SET: OnceLock<Vocabulary> = OnceLock::new();

/// Text format keywords
pub fn wat_keywords() -> &'static Vocabulary {
    WAT_KEYWORD_SET.get_or_init(|| WAT_KEYWORDS.iter().copied().collect())
}

/// Text format types
pub fn wat_types() -> &'static Vocabulary {
    WAT_TYPE_SET.get_or_init(|| WAT_TYPES.iter().copied().collect())
}

/// Full instruction mnemonic set
pub fn instructions() -> &'static Vocabulary {
    INSTRUCTION_SET.get_or_init(|| INSTRUCTIONS.iter().copied().collect())
}

/// Pseudocode keywords
pub fn pseudo_keywords() -> &'static Vocabulary {
    PSEUDO_KEYWORD_SET.get_or_init(|| PSEUDO_KEYWORDS.iter().copied().collect())
}

/// Pseudocode types
pub fn pseudo_types() -> &'static Vocabulary {
    PSEUDO_TYPE_SET.get_or_init(|| PSEUDO_TYPES.iter().copied().collect())
}

/// Instructions as they surface in pseudocode
///
/// The decompiler renders calls and stack/variable traffic as expressions,
/// so only control words and type-prefixed opcodes (`i32.wrap_i64(x)`) can
/// appear as bare mnemonics.
pub fn pseudo_instructions() -> &'static Vocabulary {
    PSEUDO_INSTRUCTION_SET.get_or_init(|| {
        INSTRUCTIONS
            .iter()
            .copied()
            .filter(|w| CONTROL_INSTRUCTIONS.contains(w) || is_typed_opcode(w))
            .collect()
    })
}

/// `i32.add`, `f64.promote_f32`, ... but not `local.get` or `memory.size`
fn is_typed_opcode(word: &str) -> bool {
    match word.split_once('.') {
        Some((prefix, _)) => WAT_TYPES.contains(&prefix),
        None => false,
    }
}
