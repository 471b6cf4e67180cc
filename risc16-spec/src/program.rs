//! Assembled program container
//!
//! Holds the outcome of assembling one source submission: the encoded code
//! words in source order plus every per-line error that was collected.
//! Success is defined as "no errors"; an empty program with no errors is
//! still a success.

use crate::CodeWord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An error tagged with its 1-based source line number
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    /// 1-based source line number
    pub line: usize,
    /// Error message
    pub message: String,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// The result of assembling a whole source text
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledProgram {
    /// Encoded code words, in source line order
    pub words: Vec<CodeWord>,
    /// Collected errors, in source line order
    pub errors: Vec<LineError>,
}

impl AssembledProgram {
    /// Whether assembly succeeded. Equivalent to `errors.is_empty()`;
    /// a successful program may still contain zero words.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of encoded instructions
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the program contains no instructions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
