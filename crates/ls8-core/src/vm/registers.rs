//! Register File
//!
//! Eight 8-bit general-purpose registers. R7 doubles as the stack pointer;
//! it is an ordinary register here and any policy around it lives in the VM.

use crate::config::REGISTER_COUNT;
use crate::error::{Ls8Error, Ls8Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    values: [u8; REGISTER_COUNT],
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: u8) -> Ls8Result<u8> {
        self.values
            .get(index as usize)
            .copied()
            .ok_or(Ls8Error::InvalidRegister(index))
    }

    pub fn set(&mut self, index: u8, value: u8) -> Ls8Result<()> {
        let slot = self
            .values
            .get_mut(index as usize)
            .ok_or(Ls8Error::InvalidRegister(index))?;
        *slot = value;
        Ok(())
    }

    pub fn all(&self) -> &[u8] {
        &self.values
    }
}
