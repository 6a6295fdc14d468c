//! VM Memory Model
//!
//! Flat byte-addressed RAM. Every access is bounds checked.

use crate::config::MEMORY_SIZE;
use crate::error::{Ls8Error, Ls8Result};

/// Main memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<u8>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Zero-filled memory of `MEMORY_SIZE` cells
    pub fn new() -> Self {
        Memory {
            cells: vec![0; MEMORY_SIZE],
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn read(&self, address: usize) -> Ls8Result<u8> {
        self.cells
            .get(address)
            .copied()
            .ok_or(Ls8Error::OutOfBounds(address))
    }

    pub fn write(&mut self, address: usize, value: u8) -> Ls8Result<()> {
        let cell = self
            .cells
            .get_mut(address)
            .ok_or(Ls8Error::OutOfBounds(address))?;
        *cell = value;
        Ok(())
    }

    /// Copy a program image to consecutive addresses starting at 0.
    /// Cells past the image keep their contents.
    pub fn load(&mut self, image: &[u8]) -> Ls8Result<()> {
        if image.len() > self.cells.len() {
            return Err(Ls8Error::ProgramTooLarge {
                size: image.len(),
                capacity: self.cells.len(),
            });
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
