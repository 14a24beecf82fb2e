use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::instructions::{opcode_for, Instruction};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsmConfig {
    /// Reject operands that do not fit their encoded field instead of
    /// truncating them. op1/op2 must fit 16 bits, op3 must fit 8.
    pub strict_operands: bool,
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            strict_operands: false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("line {line}: expected mnemonic and 3 operands, found {count} tokens")]
    MalformedLine { line: usize, count: usize },
    #[error("line {line}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { line: usize, mnemonic: String },
    #[error("line {line}: bad operand `{token}`")]
    BadOperand { line: usize, token: String },
    #[error("line {line}: operand `{token}` does not fit its field")]
    OperandRange { line: usize, token: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    cfg: AsmConfig,
}

/// Assemble with the default (truncating) configuration.
pub fn assemble(source: &str) -> Result<Vec<u8>, AsmError> {
    Assembler::new(AsmConfig::default()).assemble(source)
}

impl Assembler {
    pub fn new(cfg: AsmConfig) -> Self {
        Self { cfg }
    }

    /// Translate a full source listing into a flat binary image, 6 bytes per
    /// instruction line, in source order. The first malformed line aborts the
    /// whole call; nothing assembled before or after it is returned.
    pub fn assemble(&self, source: &str) -> Result<Vec<u8>, AsmError> {
        let mut out = Vec::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            trace!(line, raw, "reading line");
            if is_comment_or_blank(raw) {
                continue;
            }
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            if tokens.len() != 4 {
                return Err(AsmError::MalformedLine {
                    line,
                    count: tokens.len(),
                });
            }
            let opcode = opcode_for(tokens[0]).ok_or_else(|| AsmError::UnknownMnemonic {
                line,
                mnemonic: tokens[0].to_string(),
            })?;
            let op1 = self.operand(line, tokens[1], 0xFFFF)?;
            let op2 = self.operand(line, tokens[2], 0xFFFF)?;
            let op3 = self.operand(line, tokens[3], 0xFF)?;
            let instr = Instruction {
                opcode,
                op1,
                op2,
                op3,
            };
            trace!(line, ?instr, "encoded");
            out.extend_from_slice(&instr.to_bytes());
        }
        Ok(out)
    }

    fn operand(&self, line: usize, token: &str, max: u64) -> Result<u16, AsmError> {
        let val = parse_operand(token).ok_or_else(|| AsmError::BadOperand {
            line,
            token: token.to_string(),
        })?;
        if self.cfg.strict_operands && val > max {
            return Err(AsmError::OperandRange {
                line,
                token: token.to_string(),
            });
        }
        Ok(val as u16)
    }
}

/// A `//` marker anywhere discards the whole line; there are no trailing
/// inline comments. Blank and whitespace-only lines are skipped too.
fn is_comment_or_blank(line: &str) -> bool {
    line.contains("//") || line.trim().is_empty()
}

/// Operand tokens are `0x`-prefixed hex. The prefix strip is positional:
/// the first two characters go, whatever they are, and the rest parses
/// base-16. Values above 16 bits are kept here and truncated at encode.
fn parse_operand(token: &str) -> Option<u64> {
    let digits = token.get(2..)?;
    u64::from_str_radix(digits, 16).ok()
}
