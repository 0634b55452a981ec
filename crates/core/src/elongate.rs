//! Elongation — growing substituted text to its target length.
//!
//! Uses whole-string repetition: the result is the input concatenated with
//! itself until it reaches the target, so the output still reads as repeats
//! of the original string instead of trailing filler. Overshoot is bounded
//! by one copy minus a character.

/// Grows `text` to at least `target_chars` decoded characters.
///
/// Returns the input unchanged when it is empty (repeating an empty string
/// never grows) or already long enough. Never truncates.
pub fn elongate(text: &str, target_chars: usize) -> String {
    let current = text.chars().count();
    if current == 0 || current >= target_chars {
        return text.to_owned();
    }
    let copies = target_chars.div_ceil(current);
    text.repeat(copies)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
