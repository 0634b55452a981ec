//! Static glyph-substitution table for the 52 ASCII letters.
//!
//! Each letter maps to a visually related but clearly decorated code point,
//! so any string that went through the pseudo-localization pipeline is
//! recognizable at a glance. Every other character passes through unchanged:
//! digits, punctuation, whitespace, and pre-existing non-ASCII content stay
//! visible in the output, and the substituted text always has the same
//! character count as its source.

/// Fixed letter → decorated-glyph mapping.
///
/// `lower[i]` substitutes `'a' + i`, `upper[i]` substitutes `'A' + i`.
/// There is no runtime mutation path; use [`DEFAULT_GLYPHS`] unless a test
/// injects its own table.
pub struct GlyphTable {
    pub(crate) lower: [char; 26],
    pub(crate) upper: [char; 26],
}

/// The standard substitution table.
pub static DEFAULT_GLYPHS: GlyphTable = GlyphTable {
    #[rustfmt::skip]
    lower: [
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        'α', 'ḅ', 'ͼ', 'ḍ', 'ḛ', 'ϝ', 'ḡ', 'ḥ', 'ḭ', 'ĵ', 'ḳ', 'ḽ', 'ṃ',
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        'ṇ', 'ṓ', 'ṗ', 'ʠ', 'ṛ', 'ṡ', 'ṭ', 'ṵ', 'ṽ', 'ẁ', 'ẋ', 'ẏ', 'ẓ',
    ],
    #[rustfmt::skip]
    upper: [
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        'Ḁ', 'Ḃ', 'Ḉ', 'Ḍ', 'Ḛ', 'Ḟ', 'Ḡ', 'Ḥ', 'Ḭ', 'Ĵ', 'Ḱ', 'Ḻ', 'Ṁ',
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        'Ṅ', 'Ṏ', 'Ṕ', 'Ǫ', 'Ṛ', 'Ṣ', 'Ṫ', 'Ṳ', 'Ṿ', 'Ŵ', 'Ẋ', 'Ŷ', 'Ż',
    ],
};

impl GlyphTable {
    /// Substitutes a single character. Non-letters come back unchanged.
    pub fn substitute_char(&self, c: char) -> char {
        match c {
            'a'..='z' => self.lower[c as usize - 'a' as usize],
            'A'..='Z' => self.upper[c as usize - 'A' as usize],
            _ => c,
        }
    }

    /// Substitutes every letter in `text`. Total over any input; empty in,
    /// empty out.
    pub fn substitute(&self, text: &str) -> String {
        text.chars().map(|c| self.substitute_char(c)).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
