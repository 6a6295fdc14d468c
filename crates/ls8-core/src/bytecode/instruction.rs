//! Decoded Instruction Representation
//!
//! An opcode together with the operand bytes that follow it in memory.
//! This layer contains no execution semantics.

use std::fmt;

use crate::error::{Ls8Error, Ls8Result};
use crate::vm::memory::Memory;

use super::opcode::OpCode;

/// Decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: OpCode,
    operands: [u8; 2],
}

impl Instruction {
    /// Create an instruction with no operand
    pub fn new(opcode: OpCode) -> Self {
        Instruction {
            opcode,
            operands: [0; 2],
        }
    }

    /// Fetch and decode the instruction stored at `address`.
    ///
    /// An unmapped opcode byte fails with `UnknownOpcode`; operands that
    /// would run past the end of memory fail with `OutOfBounds`.
    pub fn decode(memory: &Memory, address: usize) -> Ls8Result<Self> {
        let byte = memory.read(address)?;
        let opcode = OpCode::from_u8(byte)
            .ok_or(Ls8Error::UnknownOpcode { opcode: byte, address })?;

        let mut inst = Self::new(opcode);
        for i in 0..opcode.operand_count() {
            inst.operands[i] = memory.read(address + 1 + i)?;
        }
        Ok(inst)
    }

    /// Operand bytes actually used by this instruction
    pub fn operands(&self) -> &[u8] {
        &self.operands[..self.opcode.operand_count()]
    }

    pub fn operand_a(&self) -> u8 {
        self.operands[0]
    }

    pub fn operand_b(&self) -> u8 {
        self.operands[1]
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode.mnemonic())?;
        match self.opcode {
            OpCode::Ldi => write!(f, " R{}, {}", self.operand_a(), self.operand_b()),
            OpCode::Add | OpCode::Mul => {
                write!(f, " R{}, R{}", self.operand_a(), self.operand_b())
            }
            OpCode::Prn | OpCode::Push | OpCode::Pop | OpCode::Call => {
                write!(f, " R{}", self.operand_a())
            }
            OpCode::Hlt | OpCode::Ret => Ok(()),
        }
    }
}
