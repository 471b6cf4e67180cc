//! Memory image formatting
//!
//! Renders an assembled program as a textual memory image suitable for
//! direct load by the simulation engine: one 4-hex-digit upper-case word
//! per line, NOP-padded to a minimum depth.

use crate::CodeWord;

/// Minimum number of words in a memory image
pub const MIN_IMAGE_WORDS: usize = 8;

/// The NOP code word used for padding
pub const NOP_WORD: CodeWord = 0x0000;

/// Format each word as a 4-hex-digit line, padding with NOP words up to
/// [`MIN_IMAGE_WORDS`] lines.
pub fn image_lines(words: &[CodeWord]) -> Vec<String> {
    let mut lines: Vec<String> = words.iter().map(|w| format!("{w:04X}")).collect();
    while lines.len() < MIN_IMAGE_WORDS {
        lines.push(format!("{NOP_WORD:04X}"));
    }
    lines
}

/// Render the newline-joined memory image text
pub fn to_image(words: &[CodeWord]) -> String {
    image_lines(words).join("\n")
}
