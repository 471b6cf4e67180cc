//! Whole-program assembly driver
//!
//! Line-oriented pipeline: strip trailing comments, skip blank lines, parse
//! and encode each remaining line. A failure on one line never stops the
//! scan; every error is recorded against its 1-based line number so the
//! caller receives the complete set in one pass.

use crate::parser::parse_line;
use risc16_spec::{AssembledProgram, LineError};

/// Assemble source text into a program, collecting all per-line errors
pub fn assemble(source: &str) -> AssembledProgram {
    let mut program = AssembledProgram::default();

    for (index, raw) in source.lines().enumerate() {
        // Everything from the first ';' onward is a comment
        let line = raw.split(';').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(instr) => program.words.push(instr.encode()),
            Err(e) => program.errors.push(LineError {
                line: index + 1,
                message: e.to_string(),
            }),
        }
    }

    program
}
