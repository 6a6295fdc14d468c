//! VM Stack Discipline
//!
//! Descending, full stack living in main memory and addressed through the
//! stack pointer register. The stack occupies `[floor, capacity)`.
//!
//! With 8-bit registers the top of memory (`capacity == 256`) is stored as
//! `0`, so a zeroed stack pointer means "empty" and the first push lands in
//! the last memory cell. For the same reason address 0 can never hold a
//! stack element: a stack pointer of 0 would read back as empty.

use crate::config::STACK_POINTER;
use crate::error::{Ls8Error, Ls8Result};

use super::memory::Memory;
use super::registers::Registers;

/// Borrowed view over memory and the stack pointer
#[derive(Debug)]
pub struct Stack<'a> {
    memory: &'a mut Memory,
    registers: &'a mut Registers,
    floor: usize,
}

impl<'a> Stack<'a> {
    pub fn new(memory: &'a mut Memory, registers: &'a mut Registers, floor: usize) -> Self {
        Stack {
            memory,
            registers,
            floor,
        }
    }

    /// Address of the current top element; `capacity` when empty
    pub fn top(&self) -> Ls8Result<usize> {
        let sp = self.registers.get(STACK_POINTER)?;
        if sp == 0 {
            Ok(self.memory.capacity())
        } else {
            Ok(sp as usize)
        }
    }

    /// Number of bytes currently on the stack
    pub fn depth(&self) -> Ls8Result<usize> {
        Ok(self.memory.capacity() - self.top()?)
    }

    /// Decrement SP, then store `value` at the new top
    pub fn push(&mut self, value: u8) -> Ls8Result<()> {
        let top = self.top()?;
        let floor = self.floor.max(1);
        if top - 1 < floor {
            return Err(Ls8Error::StackOverflow { floor });
        }

        let new_top = top - 1;
        self.memory.write(new_top, value)?;
        self.registers.set(STACK_POINTER, new_top as u8)
    }

    /// Value at the top of the stack
    pub fn peek(&self) -> Ls8Result<u8> {
        let top = self.top()?;
        if top >= self.memory.capacity() {
            return Err(Ls8Error::StackUnderflow);
        }
        self.memory.read(top)
    }

    /// Increment SP by one cell. SP is re-read, so a pop that targeted the
    /// stack pointer itself increments the freshly loaded value.
    pub fn release(&mut self) -> Ls8Result<()> {
        let sp = self.registers.get(STACK_POINTER)?;
        // 255 + 1 wraps back to the empty marker
        self.registers.set(STACK_POINTER, sp.wrapping_add(1))
    }

    /// Load the value at the top, then increment SP
    pub fn pop(&mut self) -> Ls8Result<u8> {
        let value = self.peek()?;
        self.release()?;
        Ok(value)
    }
}
