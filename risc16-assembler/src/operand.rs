//! Operand token parsing
//!
//! Registers accept the case-insensitive forms `Rn` and `[Rn]` with
//! n in 0..=3; bracket characters are stripped before validation.
//! Immediates accept decimal, `0x`/`0X` hex and `0b`/`0B` binary literals
//! in the range 0..=255. Failures always cite the offending token verbatim.

use crate::error::{AssemblerError, Result};
use risc16_spec::{Register, IMM_MAX};

/// Parse a register operand (`R0`-`R3`, optionally bracketed)
pub fn parse_register(token: &str) -> Result<Register> {
    let stripped: String = token
        .trim()
        .chars()
        .filter(|c| *c != '[' && *c != ']')
        .collect();
    let upper = stripped.to_uppercase();
    let bytes = upper.as_bytes();

    if bytes.len() == 2 && bytes[0] == b'R' {
        if let Some(index) = (bytes[1] as char).to_digit(10) {
            if let Some(reg) = Register::from_index(index as usize) {
                return Ok(reg);
            }
        }
    }

    Err(AssemblerError::InvalidRegister(token.to_string()))
}

/// Parse an immediate operand (decimal, hex or binary, 0..=255)
pub fn parse_immediate(token: &str) -> Result<u8> {
    let s = token.trim();

    let value = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2)
    } else {
        s.parse::<i64>()
    }
    .map_err(|_| AssemblerError::InvalidImmediate(token.to_string()))?;

    if !(0..=IMM_MAX as i64).contains(&value) {
        return Err(AssemblerError::ImmediateOutOfRange(value));
    }

    Ok(value as u8)
}
