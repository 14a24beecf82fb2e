pub mod asm;
pub mod instructions;

pub use asm::{assemble, AsmConfig, AsmError, Assembler};
pub use instructions::{opcode_for, Instruction, OpDesc, INSTR_BYTES, TABLE};
