//! Character class lookup tables for O(1) membership testing
//!
//! Pre-computed 256-entry tables for the byte classes the dialect scanners
//! test on every step. Non-ASCII bytes belong to no class, so multi-byte
//! UTF-8 sequences are skipped one byte at a time by the scanners.

/// Pre-computed character class lookup tables
///
/// Each boolean array is indexed by the byte value (0-255).
#[derive(Clone, Copy, Debug)]
pub struct CharClassTables {
    /// Digit characters [0-9]
    pub digit: [bool; 256],

    /// Hex digit characters [0-9a-fA-F]
    pub hex_digit: [bool; 256],

    /// Word start characters [a-zA-Z_]
    pub word_start: [bool; 256],

    /// Word continuation characters [a-zA-Z0-9_.]
    ///
    /// Dots are included so type-prefixed mnemonics (`i32.add`) scan as a
    /// single word.
    pub word: [bool; 256],

    /// Whitespace characters [ \t\n\r\f\v]
    pub space: [bool; 256],

    /// Characters allowed after the `$` sigil in the text format
    pub sigil: [bool; 256],

    /// Operator characters [+\-*/%&|^~<>=!]
    pub operator: [bool; 256],

    /// Structural punctuation [()[]{}:,;]
    pub punct: [bool; 256],
}

impl CharClassTables {
    /// Create all character class tables at compile time
    pub const fn new() -> Self {
        let mut tables = Self {
            digit: [false; 256],
            hex_digit: [false; 256],
            word_start: [false; 256],
            word: [false; 256],
            space: [false; 256],
            sigil: [false; 256],
            operator: [false; 256],
            punct: [false; 256],
        };

        // Initialize digit [0-9]
        let mut i = b'0';
        while i <= b'9' {
            tables.digit[i as usize] = true;
            tables.hex_digit[i as usize] = true;
            tables.word[i as usize] = true;
            tables.sigil[i as usize] = true;
            i += 1;
        }

        // Initialize lowercase [a-z] and hex [a-f]
        i = b'a';
        while i <= b'z' {
            tables.word_start[i as usize] = true;
            tables.word[i as usize] = true;
            tables.sigil[i as usize] = true;
            if i <= b'f' {
                tables.hex_digit[i as usize] = true;
            }
            i += 1;
        }

        // Initialize uppercase [A-Z] and hex [A-F]
        i = b'A';
        while i <= b'Z' {
            tables.word_start[i as usize] = true;
            tables.word[i as usize] = true;
            tables.sigil[i as usize] = true;
            if i <= b'F' {
                tables.hex_digit[i as usize] = true;
            }
            i += 1;
        }

        tables.word_start[b'_' as usize] = true;
        tables.word[b'_' as usize] = true;
        tables.word[b'.' as usize] = true;

        tables.space[b' ' as usize] = true;
        tables.space[b'\t' as usize] = true;
        tables.space[b'\n' as usize] = true;
        tables.space[b'\r' as usize] = true;
        tables.space[0x0C_usize] = true; // form feed
        tables.space[0x0B_usize] = true; // vertical tab

        // Text format identifier characters besides alphanumerics
        let sigil_extra = b"_!#$%&'*+-./:<=>?@\\^`|~";
        let mut j = 0;
        while j < sigil_extra.len() {
            tables.sigil[sigil_extra[j] as usize] = true;
            j += 1;
        }

        let operators = b"+-*/%&|^~<>=!";
        j = 0;
        while j < operators.len() {
            tables.operator[operators[j] as usize] = true;
            j += 1;
        }

        let punct = b"()[]{}:,;";
        j = 0;
        while j < punct.len() {
            tables.punct[punct[j] as usize] = true;
            j += 1;
        }

        tables
    }

    /// Check if byte is a digit [0-9]
    #[inline(always)]
    pub const fn is_digit(&self, b: u8) -> bool {
        self.digit[b as usize]
    }

    /// Check if byte is a hex digit [0-9a-fA-F]
    #[inline(always)]
    pub const fn is_hex_digit(&self, b: u8) -> bool {
        self.hex_digit[b as usize]
    }

    /// Check if byte can start a bare word
    #[inline(always)]
    pub const fn is_word_start(&self, b: u8) -> bool {
        self.word_start[b as usize]
    }

    /// Check if byte can continue a bare word
    #[inline(always)]
    pub const fn is_word(&self, b: u8) -> bool {
        self.word[b as usize]
    }

    /// Check if byte is whitespace
    #[inline(always)]
    pub const fn is_space(&self, b: u8) -> bool {
        self.space[b as usize]
    }

    /// Check if byte may follow the `$` sigil
    #[inline(always)]
    pub const fn is_sigil(&self, b: u8) -> bool {
        self.sigil[b as usize]
    }

    /// Check if byte is an operator character
    #[inline(always)]
    pub const fn is_operator(&self, b: u8) -> bool {
        self.operator[b as usize]
    }

    /// Check if byte is structural punctuation
    #[inline(always)]
    pub const fn is_punct(&self, b: u8) -> bool {
        self.punct[b as usize]
    }
}

impl Default for CharClassTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Global character class tables (computed at compile time)
pub static CHAR_CLASSES: CharClassTables = CharClassTables::new();
