//! Register definitions for RISC-16 (4 general-purpose registers)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 4;

/// Register (R0-R3)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    #[default]
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
}

impl Register {
    /// Register field width in bits
    pub const BITS: usize = 2;

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Register::R0),
            1 => Some(Register::R1),
            2 => Some(Register::R2),
            3 => Some(Register::R3),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for i in 0..NUM_REGISTERS {
            let reg = Register::from_index(i).unwrap();
            assert_eq!(reg.index(), i);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Register::from_index(4), None);
        assert_eq!(Register::from_index(usize::MAX), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Register::R0.to_string(), "R0");
        assert_eq!(Register::R3.to_string(), "R3");
    }
}
