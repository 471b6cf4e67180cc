//! Assembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblerError {
    #[error("empty instruction")]
    EmptyInstruction,

    #[error("unknown instruction: {0}")]
    UnknownInstruction(String),

    #[error("{mnemonic} requires {expected}")]
    MissingOperands {
        mnemonic: String,
        expected: &'static str,
    },

    #[error("invalid register: {0} (use R0, R1, R2, or R3)")]
    InvalidRegister(String),

    #[error("invalid immediate value: {0}")]
    InvalidImmediate(String),

    #[error("immediate value out of range (0-255): {0}")]
    ImmediateOutOfRange(i64),
}

/// Coarse classification of assembler errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown mnemonic or wrong operand count
    Syntax,
    /// Invalid register/immediate token, or immediate out of range
    Operand,
}

impl AssemblerError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssemblerError::EmptyInstruction
            | AssemblerError::UnknownInstruction(_)
            | AssemblerError::MissingOperands { .. } => ErrorKind::Syntax,
            AssemblerError::InvalidRegister(_)
            | AssemblerError::InvalidImmediate(_)
            | AssemblerError::ImmediateOutOfRange(_) => ErrorKind::Operand,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssemblerError::UnknownInstruction("FOO".to_string());
        assert_eq!(err.to_string(), "unknown instruction: FOO");

        let err = AssemblerError::ImmediateOutOfRange(256);
        assert_eq!(err.to_string(), "immediate value out of range (0-255): 256");

        let err = AssemblerError::MissingOperands {
            mnemonic: "ADD".to_string(),
            expected: "two registers (Rd, Rs)",
        };
        assert_eq!(err.to_string(), "ADD requires two registers (Rd, Rs)");
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            AssemblerError::UnknownInstruction("FOO".into()).kind(),
            ErrorKind::Syntax
        );
        assert_eq!(
            AssemblerError::InvalidRegister("R9".into()).kind(),
            ErrorKind::Operand
        );
        assert_eq!(
            AssemblerError::ImmediateOutOfRange(300).kind(),
            ErrorKind::Operand
        );
    }
}
