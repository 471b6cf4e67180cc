//! RISC-16 Instruction and code-word encoding
//!
//! A code word is 16 bits:
//!
//! ```text
//! [opcode:4][rd:2][rs:2][imm:8]
//!  15..12    11..10 9..8  7..0
//! ```
//!
//! Fields unused by an opcode's format are encoded as zero. Because the
//! register and immediate fields are range-limited by their types and the
//! 4-bit opcode space is fully assigned, `encode` and `decode` are total
//! and mutually inverse.

use crate::opcode::Opcode;
use crate::register::Register;
use crate::CodeWord;
use serde::{Deserialize, Serialize};

/// Bit offset of the opcode field
pub const OPCODE_SHIFT: u32 = 12;
/// Bit offset of the destination register field
pub const RD_SHIFT: u32 = 10;
/// Bit offset of the source register field
pub const RS_SHIFT: u32 = 8;
/// Mask for the immediate field
pub const IMM_MASK: u16 = 0x00FF;

/// A single decoded instruction
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Operation
    pub opcode: Opcode,
    /// Destination register (bits 11-10)
    pub rd: Register,
    /// Source register (bits 9-8)
    pub rs: Register,
    /// Immediate value (bits 7-0)
    pub imm: u8,
}

impl Instruction {
    /// Create an instruction with all operand fields zeroed
    pub const fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            rd: Register::R0,
            rs: Register::R0,
            imm: 0,
        }
    }

    /// Encode to a 16-bit code word
    #[inline]
    pub const fn encode(self) -> CodeWord {
        ((self.opcode.to_u8() as u16) << OPCODE_SHIFT)
            | ((self.rd.index() as u16) << RD_SHIFT)
            | ((self.rs.index() as u16) << RS_SHIFT)
            | (self.imm as u16 & IMM_MASK)
    }

    /// Decode a 16-bit code word
    ///
    /// Total over all `u16` values: every 4-bit opcode is assigned and the
    /// register fields cannot exceed 2 bits.
    #[inline]
    pub fn decode(word: CodeWord) -> Self {
        let opcode = Opcode::from_nibble((word >> OPCODE_SHIFT) as u8);
        let rd = Register::from_index(((word >> RD_SHIFT) & 0x3) as usize)
            .unwrap_or(Register::R0);
        let rs = Register::from_index(((word >> RS_SHIFT) & 0x3) as usize)
            .unwrap_or(Register::R0);
        Self {
            opcode,
            rd,
            rs,
            imm: (word & IMM_MASK) as u8,
        }
    }
}
