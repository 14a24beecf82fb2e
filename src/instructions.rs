use serde::{Deserialize, Serialize};

/// Bytes per encoded instruction. The stream has no header or padding,
/// so an image is always a whole multiple of this stride.
pub const INSTR_BYTES: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct OpDesc {
    pub mnemonic: &'static str,
    pub opcode: u8,
}

pub const TABLE: &[OpDesc] = &[
    OpDesc {
        mnemonic: "ADD",
        opcode: 0x01,
    },
    OpDesc {
        mnemonic: "ADDC",
        opcode: 0x02,
    },
    OpDesc {
        mnemonic: "SUB",
        opcode: 0x03,
    },
    OpDesc {
        mnemonic: "SUBC",
        opcode: 0x04,
    },
    OpDesc {
        mnemonic: "AND",
        opcode: 0x06,
    },
    OpDesc {
        mnemonic: "OR",
        opcode: 0x07,
    },
    OpDesc {
        mnemonic: "XOR",
        opcode: 0x08,
    },
    OpDesc {
        mnemonic: "SLL",
        opcode: 0x09,
    },
    OpDesc {
        mnemonic: "SRL",
        opcode: 0x0A,
    },
    OpDesc {
        mnemonic: "SRA",
        opcode: 0x0B,
    },
    OpDesc {
        mnemonic: "LDL",
        opcode: 0x0C,
    },
    OpDesc {
        mnemonic: "STL",
        opcode: 0x10,
    },
    OpDesc {
        mnemonic: "JMP",
        opcode: 0x13,
    },
    OpDesc {
        mnemonic: "JMPR",
        opcode: 0x14,
    },
    OpDesc {
        mnemonic: "CALL",
        opcode: 0x15,
    },
    OpDesc {
        mnemonic: "CALLR",
        opcode: 0x16,
    },
    OpDesc {
        mnemonic: "RET",
        opcode: 0x17,
    },
    OpDesc {
        mnemonic: "PRNT",
        opcode: 0x18,
    },
    OpDesc {
        mnemonic: "RBUS",
        opcode: 0x20,
    },
    OpDesc {
        mnemonic: "WBUS",
        opcode: 0x21,
    },
    OpDesc {
        mnemonic: "STP",
        opcode: 0x30,
    },
];

/// Case-sensitive exact lookup, `None` for anything not in the table.
pub fn opcode_for(mnemonic: &str) -> Option<u8> {
    TABLE
        .iter()
        .find(|d| d.mnemonic == mnemonic)
        .map(|d| d.opcode)
}

/// One decoded source line. Lives only long enough to be serialized into
/// the output buffer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: u8,
    pub op1: u16,
    pub op2: u16,
    pub op3: u16,
}

impl Instruction {
    /// Wire layout: opcode, then op1 and op2 as big-endian u16.
    /// op3 is emitted low byte only; its high byte never reaches the image.
    pub fn to_bytes(self) -> [u8; INSTR_BYTES] {
        [
            self.opcode,
            (self.op1 >> 8) as u8,
            self.op1 as u8,
            (self.op2 >> 8) as u8,
            self.op2 as u8,
            self.op3 as u8,
        ]
    }
}
