//! Instruction Opcode Definitions
//!
//! Defines the LS-8 instruction set. The whole instruction byte selects the
//! operation; its bit fields are laid out as `AABCDDDD`:
//!
//! * `AA`   number of operand bytes that follow (0..=2)
//! * `B`    handled by the ALU
//! * `C`    sets the program counter directly
//! * `DDDD` instruction identifier
//!
//! This file contains no execution semantics.

/// LS-8 opcodes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    // System
    Hlt = 0b0000_0001,
    Prn = 0b0100_0111,

    // Data movement
    Ldi = 0b1000_0010,

    // Arithmetic
    Add = 0b1010_0000,
    Mul = 0b1010_0010,

    // Stack
    Push = 0b0100_0101,
    Pop  = 0b0100_0110,

    // Control flow
    Call = 0b0101_0000,
    Ret  = 0b0001_0001,
}

const OPERAND_COUNT_SHIFT: u8 = 6;
const ALU_FLAG: u8 = 0b0010_0000;
const SETS_PC_FLAG: u8 = 0b0001_0000;

impl OpCode {
    /// Every opcode the VM understands
    pub const ALL: [OpCode; 9] = [
        OpCode::Hlt,
        OpCode::Prn,
        OpCode::Ldi,
        OpCode::Add,
        OpCode::Mul,
        OpCode::Push,
        OpCode::Pop,
        OpCode::Call,
        OpCode::Ret,
    ];

    /// Convert raw byte to opcode
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0b0000_0001 => Some(OpCode::Hlt),
            0b0100_0111 => Some(OpCode::Prn),
            0b1000_0010 => Some(OpCode::Ldi),
            0b1010_0000 => Some(OpCode::Add),
            0b1010_0010 => Some(OpCode::Mul),
            0b0100_0101 => Some(OpCode::Push),
            0b0100_0110 => Some(OpCode::Pop),
            0b0101_0000 => Some(OpCode::Call),
            0b0001_0001 => Some(OpCode::Ret),
            _ => None,
        }
    }

    /// Operand bytes following the opcode
    pub fn operand_count(self) -> usize {
        (self as u8 >> OPERAND_COUNT_SHIFT) as usize
    }

    /// Bytes occupied by the whole instruction
    pub fn width(self) -> usize {
        1 + self.operand_count()
    }

    pub fn is_alu(self) -> bool {
        self as u8 & ALU_FLAG != 0
    }

    /// Control transfers set PC themselves instead of advancing past their operands.
    pub fn sets_pc(self) -> bool {
        self as u8 & SETS_PC_FLAG != 0
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Hlt => "HLT",
            OpCode::Prn => "PRN",
            OpCode::Ldi => "LDI",
            OpCode::Add => "ADD",
            OpCode::Mul => "MUL",
            OpCode::Push => "PUSH",
            OpCode::Pop => "POP",
            OpCode::Call => "CALL",
            OpCode::Ret => "RET",
        }
    }
}
