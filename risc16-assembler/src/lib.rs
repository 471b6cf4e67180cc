//! RISC-16 Assembler
//!
//! Assemble RISC-16 assembly source into 16-bit code words.
//!
//! Errors never abort the scan: every line's outcome is recorded
//! independently and the final [`AssembledProgram`] carries the complete
//! error list with 1-based line numbers.
//!
//! ## Example
//!
//! ```rust
//! use risc16_assembler::assemble;
//!
//! let source = r#"
//!     LDI R0, 5   ; R0 = 5
//!     HLT
//! "#;
//!
//! let program = assemble(source);
//! assert!(program.is_success());
//! assert_eq!(program.words, vec![0x9005, 0xE000]);
//! ```

pub mod assembler;
pub mod error;
pub mod operand;
pub mod parser;

pub use assembler::assemble;
pub use error::{AssemblerError, ErrorKind, Result};
pub use operand::{parse_immediate, parse_register};
pub use parser::parse_line;

#[doc(inline)]
pub use risc16_spec::AssembledProgram;
