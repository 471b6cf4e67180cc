//! Single-line instruction parsing
//!
//! Splits a source line into mnemonic and operand tokens, resolves the
//! opcode, and fills the operand slots dictated by the opcode's
//! [`InstructionFormat`].

use crate::error::{AssemblerError, Result};
use crate::operand::{parse_immediate, parse_register};
use risc16_spec::{Instruction, InstructionFormat, Opcode};

/// Parse a single non-empty, comment-free line into an instruction
pub fn parse_line(line: &str) -> Result<Instruction> {
    // Operands are comma- and/or whitespace-separated
    let normalized = line.replace(',', " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let Some((&head, operands)) = tokens.split_first() else {
        return Err(AssemblerError::EmptyInstruction);
    };

    let opcode = Opcode::from_mnemonic(head)
        .ok_or_else(|| AssemblerError::UnknownInstruction(head.to_string()))?;
    let format = opcode.format();

    if operands.len() != format.operand_count() {
        return Err(AssemblerError::MissingOperands {
            mnemonic: opcode.to_string(),
            expected: format.operand_description(),
        });
    }

    let mut instr = Instruction::new(opcode);
    match format {
        InstructionFormat::None => {}
        InstructionFormat::Reg => {
            instr.rd = parse_register(operands[0])?;
        }
        InstructionFormat::RegReg => {
            instr.rd = parse_register(operands[0])?;
            instr.rs = parse_register(operands[1])?;
        }
        InstructionFormat::RegImm => {
            instr.rd = parse_register(operands[0])?;
            instr.imm = parse_immediate(operands[1])?;
        }
        InstructionFormat::RegRegAddr => {
            instr.rd = parse_register(operands[0])?;
            instr.rs = parse_register(operands[1])?;
        }
        InstructionFormat::Imm => {
            instr.imm = parse_immediate(operands[0])?;
        }
    }

    Ok(instr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use risc16_spec::Register;

    #[test]
    fn test_parse_nullary() {
        assert_eq!(parse_line("NOP").unwrap(), Instruction::new(Opcode::Nop));
        assert_eq!(parse_line("hlt").unwrap(), Instruction::new(Opcode::Hlt));
    }

    #[test]
    fn test_parse_reg_reg() {
        let instr = parse_line("ADD R0, R1").unwrap();
        assert_eq!(instr.opcode, Opcode::Add);
        assert_eq!(instr.rd, Register::R0);
        assert_eq!(instr.rs, Register::R1);
        assert_eq!(instr.imm, 0);
    }

    #[test]
    fn test_parse_whitespace_separated_operands() {
        let instr = parse_line("sub r3 r2").unwrap();
        assert_eq!(instr.opcode, Opcode::Sub);
        assert_eq!(instr.rd, Register::R3);
        assert_eq!(instr.rs, Register::R2);
    }

    #[test]
    fn test_parse_reg_imm() {
        let instr = parse_line("LDI R2, 0x10").unwrap();
        assert_eq!(instr.opcode, Opcode::Ldi);
        assert_eq!(instr.rd, Register::R2);
        assert_eq!(instr.imm, 16);
    }

    #[test]
    fn test_parse_reg_regaddr() {
        let instr = parse_line("LD R0, [R1]").unwrap();
        assert_eq!(instr.opcode, Opcode::Ld);
        assert_eq!(instr.rd, Register::R0);
        assert_eq!(instr.rs, Register::R1);

        // Bare register form is accepted too
        let instr = parse_line("ST R2, R3").unwrap();
        assert_eq!(instr.rs, Register::R3);
    }

    #[test]
    fn test_parse_imm_only() {
        let instr = parse_line("JMP 4").unwrap();
        assert_eq!(instr.opcode, Opcode::Jmp);
        assert_eq!(instr.imm, 4);
    }

    #[test]
    fn test_unknown_instruction() {
        let err = parse_line("FOO R0").unwrap_err();
        assert_eq!(err, AssemblerError::UnknownInstruction("FOO".to_string()));
    }

    #[test]
    fn test_missing_operands() {
        let err = parse_line("ADD R0").unwrap_err();
        assert_eq!(
            err,
            AssemblerError::MissingOperands {
                mnemonic: "ADD".to_string(),
                expected: "two registers (Rd, Rs)",
            }
        );
        assert!(parse_line("LDI").is_err());
        assert!(parse_line("JMP").is_err());
    }

    #[test]
    fn test_extra_operands_rejected() {
        assert!(parse_line("NOP R0").is_err());
        assert!(parse_line("ADD R0, R1, R2").is_err());
    }

    #[test]
    fn test_operand_errors_propagate() {
        assert_eq!(
            parse_line("ADD R0, R4").unwrap_err(),
            AssemblerError::InvalidRegister("R4".to_string())
        );
        assert_eq!(
            parse_line("LDI R0, 300").unwrap_err(),
            AssemblerError::ImmediateOutOfRange(300)
        );
    }
}
