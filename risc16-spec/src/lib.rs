//! # RISC-16 Specification
//!
//! Core types for a fixed 4-register, 16-bit instruction set.
//!
//! ## Key Features
//! - 16 opcodes in a closed 4-bit opcode space
//! - 4 general-purpose registers (R0-R3)
//! - 8-bit immediates (0-255)
//! - 16-bit code words: `[opcode:4][rd:2][rs:2][imm:8]`
//! - Textual memory images for `$readmemh`-style loading

pub mod image;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

pub use image::{image_lines, to_image, MIN_IMAGE_WORDS, NOP_WORD};
pub use instruction::Instruction;
pub use opcode::{InstructionFormat, Opcode};
pub use program::{AssembledProgram, LineError};
pub use register::{Register, NUM_REGISTERS};

/// A fully encoded instruction word.
pub type CodeWord = u16;

/// Largest representable immediate value (8 bits).
pub const IMM_MAX: u16 = 255;
