//! Arithmetic Logic Unit
//!
//! Hosts the arithmetic opcodes behind a single named-operation entry point.
//! All arithmetic is 8-bit and wraps on overflow.

use crate::bytecode::opcode::OpCode;
use crate::error::{Ls8Error, Ls8Result};

pub struct Alu;

impl Alu {
    /// Apply `op` to two register values.
    ///
    /// Reaching this with a non-arithmetic opcode is a dispatch wiring bug
    /// and reported as `UnsupportedAluOperation`.
    pub fn execute(op: OpCode, a: u8, b: u8) -> Ls8Result<u8> {
        match op {
            OpCode::Add => Ok(a.wrapping_add(b)),
            OpCode::Mul => Ok(a.wrapping_mul(b)),
            other => Err(Ls8Error::UnsupportedAluOperation(other)),
        }
    }
}
