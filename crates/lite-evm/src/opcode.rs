//! Opcode definitions

use crate::revision::Revision;

/// Instructions understood by the interpreter.
///
/// The set is closed: supporting a new instruction means adding a variant,
/// its byte in [`Opcode::from_byte`], its name, and a handler in the
/// interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Opcode {
    // Stop and Arithmetic
    STOP = 0x00,
    ADD = 0x01,

    // Environmental Information
    ADDRESS = 0x30,

    // Block Information
    NUMBER = 0x43,

    // Memory and Storage
    MSTORE = 0x52,
    SLOAD = 0x54,
    SSTORE = 0x55,

    // Push Operations
    PUSH1 = 0x60,
    PUSH2 = 0x61,
    PUSH3 = 0x62,
    PUSH4 = 0x63,
    PUSH5 = 0x64,
    PUSH6 = 0x65,
    PUSH7 = 0x66,
    PUSH8 = 0x67,
    PUSH9 = 0x68,
    PUSH10 = 0x69,
    PUSH11 = 0x6A,
    PUSH12 = 0x6B,
    PUSH13 = 0x6C,
    PUSH14 = 0x6D,
    PUSH15 = 0x6E,
    PUSH16 = 0x6F,
    PUSH17 = 0x70,
    PUSH18 = 0x71,
    PUSH19 = 0x72,
    PUSH20 = 0x73,
    PUSH21 = 0x74,
    PUSH22 = 0x75,
    PUSH23 = 0x76,
    PUSH24 = 0x77,
    PUSH25 = 0x78,
    PUSH26 = 0x79,
    PUSH27 = 0x7A,
    PUSH28 = 0x7B,
    PUSH29 = 0x7C,
    PUSH30 = 0x7D,
    PUSH31 = 0x7E,
    PUSH32 = 0x7F,

    // System Operations
    RETURN = 0xF3,
    REVERT = 0xFD,
}

impl Opcode {
    /// Try to convert from byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::STOP),
            0x01 => Some(Self::ADD),
            0x30 => Some(Self::ADDRESS),
            0x43 => Some(Self::NUMBER),
            0x52 => Some(Self::MSTORE),
            0x54 => Some(Self::SLOAD),
            0x55 => Some(Self::SSTORE),
            0x60 => Some(Self::PUSH1),
            0x61 => Some(Self::PUSH2),
            0x62 => Some(Self::PUSH3),
            0x63 => Some(Self::PUSH4),
            0x64 => Some(Self::PUSH5),
            0x65 => Some(Self::PUSH6),
            0x66 => Some(Self::PUSH7),
            0x67 => Some(Self::PUSH8),
            0x68 => Some(Self::PUSH9),
            0x69 => Some(Self::PUSH10),
            0x6A => Some(Self::PUSH11),
            0x6B => Some(Self::PUSH12),
            0x6C => Some(Self::PUSH13),
            0x6D => Some(Self::PUSH14),
            0x6E => Some(Self::PUSH15),
            0x6F => Some(Self::PUSH16),
            0x70 => Some(Self::PUSH17),
            0x71 => Some(Self::PUSH18),
            0x72 => Some(Self::PUSH19),
            0x73 => Some(Self::PUSH20),
            0x74 => Some(Self::PUSH21),
            0x75 => Some(Self::PUSH22),
            0x76 => Some(Self::PUSH23),
            0x77 => Some(Self::PUSH24),
            0x78 => Some(Self::PUSH25),
            0x79 => Some(Self::PUSH26),
            0x7A => Some(Self::PUSH27),
            0x7B => Some(Self::PUSH28),
            0x7C => Some(Self::PUSH29),
            0x7D => Some(Self::PUSH30),
            0x7E => Some(Self::PUSH31),
            0x7F => Some(Self::PUSH32),
            0xF3 => Some(Self::RETURN),
            0xFD => Some(Self::REVERT),
            _ => None,
        }
    }

    /// Raw byte value
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Check if this is a PUSH opcode
    pub fn is_push(self) -> bool {
        (0x60..=0x7F).contains(&(self as u8))
    }

    /// Number of immediate bytes following a PUSH opcode (0 for everything else)
    pub fn push_size(self) -> usize {
        if self.is_push() {
            (self as u8 - 0x5F) as usize
        } else {
            0
        }
    }

    /// Revision that introduced the instruction
    pub fn since(self) -> Revision {
        match self {
            Opcode::REVERT => Revision::Byzantium,
            _ => Revision::Frontier,
        }
    }

    /// Mnemonic
    pub fn name(self) -> &'static str {
        match self {
            Opcode::STOP => "STOP",
            Opcode::ADD => "ADD",
            Opcode::ADDRESS => "ADDRESS",
            Opcode::NUMBER => "NUMBER",
            Opcode::MSTORE => "MSTORE",
            Opcode::SLOAD => "SLOAD",
            Opcode::SSTORE => "SSTORE",
            Opcode::RETURN => "RETURN",
            Opcode::REVERT => "REVERT",
            op => PUSH_NAMES[op.push_size() - 1],
        }
    }
}

const PUSH_NAMES: [&str; 32] = [
    "PUSH1", "PUSH2", "PUSH3", "PUSH4", "PUSH5", "PUSH6", "PUSH7", "PUSH8",
    "PUSH9", "PUSH10", "PUSH11", "PUSH12", "PUSH13", "PUSH14", "PUSH15", "PUSH16",
    "PUSH17", "PUSH18", "PUSH19", "PUSH20", "PUSH21", "PUSH22", "PUSH23", "PUSH24",
    "PUSH25", "PUSH26", "PUSH27", "PUSH28", "PUSH29", "PUSH30", "PUSH31", "PUSH32",
];

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
