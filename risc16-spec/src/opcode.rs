//! # RISC-16 Opcode Definitions
//!
//! This module defines the opcode values for all RISC-16 instructions.
//! Opcodes are 4 bits (0x0-0xF) and the table is closed: every value is
//! assigned, so decoding the opcode field of a code word never fails.

use serde::{Deserialize, Serialize};

/// Instruction opcode (4 bits, values 0x0-0xF)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// NOP: no operation
    Nop = 0x0,
    /// ADD: rd = rd + rs
    Add = 0x1,
    /// SUB: rd = rd - rs
    Sub = 0x2,
    /// AND: rd = rd & rs
    And = 0x3,
    /// OR: rd = rd | rs
    Or = 0x4,
    /// XOR: rd = rd ^ rs
    Xor = 0x5,
    /// NOT: rd = ~rd
    Not = 0x6,
    /// SHL: rd = rd << 1
    Shl = 0x7,
    /// SHR: rd = rd >> 1
    Shr = 0x8,
    /// LDI: rd = imm
    Ldi = 0x9,
    /// LD: rd = mem[rs]
    Ld = 0xA,
    /// ST: mem[rs] = rd
    St = 0xB,
    /// JMP: PC = imm
    Jmp = 0xC,
    /// JZ: if (rd == 0) PC = imm
    Jz = 0xD,
    /// HLT: halt execution
    Hlt = 0xE,
    /// MOV: rd = rs
    Mov = 0xF,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: usize = 4;

    /// Opcode mask (0xF for 4 bits)
    pub const MASK: u16 = 0xF;

    /// Convert a 4-bit field to an opcode.
    ///
    /// Total: the input is masked to 4 bits and every 4-bit value is
    /// assigned an opcode.
    pub const fn from_nibble(value: u8) -> Self {
        match value & 0x0F {
            0x0 => Opcode::Nop,
            0x1 => Opcode::Add,
            0x2 => Opcode::Sub,
            0x3 => Opcode::And,
            0x4 => Opcode::Or,
            0x5 => Opcode::Xor,
            0x6 => Opcode::Not,
            0x7 => Opcode::Shl,
            0x8 => Opcode::Shr,
            0x9 => Opcode::Ldi,
            0xA => Opcode::Ld,
            0xB => Opcode::St,
            0xC => Opcode::Jmp,
            0xD => Opcode::Jz,
            0xE => Opcode::Hlt,
            _ => Opcode::Mov,
        }
    }

    /// Try to convert from u8
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value > 0x0F {
            None
        } else {
            Some(Self::from_nibble(value))
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Look up an opcode by mnemonic (case-insensitive)
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        match mnemonic.to_uppercase().as_str() {
            "NOP" => Some(Opcode::Nop),
            "ADD" => Some(Opcode::Add),
            "SUB" => Some(Opcode::Sub),
            "AND" => Some(Opcode::And),
            "OR" => Some(Opcode::Or),
            "XOR" => Some(Opcode::Xor),
            "NOT" => Some(Opcode::Not),
            "SHL" => Some(Opcode::Shl),
            "SHR" => Some(Opcode::Shr),
            "LDI" => Some(Opcode::Ldi),
            "LD" => Some(Opcode::Ld),
            "ST" => Some(Opcode::St),
            "JMP" => Some(Opcode::Jmp),
            "JZ" => Some(Opcode::Jz),
            "HLT" => Some(Opcode::Hlt),
            "MOV" => Some(Opcode::Mov),
            _ => None,
        }
    }

    /// Get the operand format for this opcode
    #[inline]
    pub const fn format(self) -> InstructionFormat {
        match self {
            Opcode::Nop | Opcode::Hlt => InstructionFormat::None,
            Opcode::Not | Opcode::Shl | Opcode::Shr => InstructionFormat::Reg,
            Opcode::Add | Opcode::Sub | Opcode::And | Opcode::Or | Opcode::Xor | Opcode::Mov => {
                InstructionFormat::RegReg
            }
            Opcode::Ldi => InstructionFormat::RegImm,
            Opcode::Ld | Opcode::St => InstructionFormat::RegRegAddr,
            Opcode::Jmp | Opcode::Jz => InstructionFormat::Imm,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Opcode::Nop => "NOP",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Not => "NOT",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::Ldi => "LDI",
            Opcode::Ld => "LD",
            Opcode::St => "ST",
            Opcode::Jmp => "JMP",
            Opcode::Jz => "JZ",
            Opcode::Hlt => "HLT",
            Opcode::Mov => "MOV",
        };
        write!(f, "{}", name)
    }
}

/// Operand shape of an instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionFormat {
    /// No operands (NOP, HLT)
    None,
    /// Single register: Rd (NOT, SHL, SHR)
    Reg,
    /// Two registers: Rd, Rs (ADD, SUB, AND, OR, XOR, MOV)
    RegReg,
    /// Register and immediate: Rd, imm (LDI)
    RegImm,
    /// Register and address register: Rd, [Rs] (LD, ST)
    RegRegAddr,
    /// Immediate only: addr (JMP, JZ)
    Imm,
}

impl InstructionFormat {
    /// Number of operand tokens this format consumes
    #[inline]
    pub const fn operand_count(self) -> usize {
        match self {
            InstructionFormat::None => 0,
            InstructionFormat::Reg | InstructionFormat::Imm => 1,
            InstructionFormat::RegReg | InstructionFormat::RegImm | InstructionFormat::RegRegAddr => 2,
        }
    }

    /// Human-readable operand pattern, used in operand-count diagnostics
    pub const fn operand_description(self) -> &'static str {
        match self {
            InstructionFormat::None => "no operands",
            InstructionFormat::Reg => "a register",
            InstructionFormat::RegReg => "two registers (Rd, Rs)",
            InstructionFormat::RegImm => "a register and an immediate (Rd, value)",
            InstructionFormat::RegRegAddr => "a register and an address register (Rd, [Rs])",
            InstructionFormat::Imm => "an address",
        }
    }
}
