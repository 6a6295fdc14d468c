//! LS-8 Error Types
//!
//! Defines all error conditions produced by the LS-8 core.
//! Every error is fatal to the run that produced it; nothing is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::bytecode::opcode::OpCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Ls8Error {
    // Decode errors
    #[error("unknown instruction 0b{opcode:08b} at address 0x{address:02X}")]
    UnknownOpcode { opcode: u8, address: usize },

    // Memory & register errors
    #[error("memory access out of bounds: address {0}")]
    OutOfBounds(usize),
    #[error("invalid register: R{0}")]
    InvalidRegister(u8),
    #[error("register R{0} is protected")]
    ProtectedRegister(u8),

    // Stack errors
    #[error("stack overflow: stack may not grow below address 0x{floor:02X}")]
    StackOverflow { floor: usize },
    #[error("stack underflow")]
    StackUnderflow,

    // Execution errors
    #[error("unsupported ALU operation: {0:?}")]
    UnsupportedAluOperation(OpCode),
    #[error("step limit of {0} instructions exceeded")]
    StepLimitExceeded(u64),

    // Program image errors
    #[error("program of {size} bytes does not fit in {capacity} bytes of memory")]
    ProgramTooLarge { size: usize, capacity: usize },
    #[error("line {line}: invalid binary literal {text:?}")]
    InvalidBinaryLiteral { line: usize, text: String },
    #[error("{}: {reason}", .path.display())]
    LoadFailure { path: PathBuf, reason: String },

    // IO boundary
    #[error("io error: {0}")]
    Io(String),
}

impl From<io::Error> for Ls8Error {
    fn from(err: io::Error) -> Self {
        Ls8Error::Io(err.to_string())
    }
}

pub type Ls8Result<T> = Result<T, Ls8Error>;
