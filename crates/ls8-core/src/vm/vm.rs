//! Virtual Machine Core
//!
//! Defines the LS-8 machine state and its fetch-decode-execute loop.

use tracing::{debug, trace};

use crate::bytecode::instruction::Instruction;
use crate::bytecode::opcode::OpCode;
use crate::config::{Ls8Config, STACK_POINTER};
use crate::error::{Ls8Error, Ls8Result};

use super::alu::Alu;
use super::memory::Memory;
use super::output::OutputSink;
use super::registers::Registers;
use super::stack::Stack;

/// Execution state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VmState {
    Running,
    Halted,
}

/// LS-8 Virtual Machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualMachine {
    config: Ls8Config,
    memory: Memory,
    registers: Registers,
    pc: usize,
    state: VmState,
    image_len: usize,
}

impl VirtualMachine {
    /// Create a new VM with zeroed memory and registers
    pub fn new(config: Ls8Config) -> Self {
        VirtualMachine {
            config,
            memory: Memory::new(),
            registers: Registers::new(),
            pc: 0,
            state: VmState::Running,
            image_len: 0,
        }
    }

    /// Create a VM and load `image` into it
    pub fn with_program(config: Ls8Config, image: &[u8]) -> Ls8Result<Self> {
        let mut vm = Self::new(config);
        vm.load(image)?;
        Ok(vm)
    }

    /// Copy a program image into memory starting at address 0
    pub fn load(&mut self, image: &[u8]) -> Ls8Result<()> {
        self.memory.load(image)?;
        self.image_len = image.len();
        debug!(bytes = image.len(), "program image loaded");
        Ok(())
    }

    /// Restore registers, PC and state to their initial values.
    /// Memory is left untouched.
    pub fn reset(&mut self) {
        self.registers = Registers::new();
        self.pc = 0;
        self.state = VmState::Running;
    }

    /// Execute until halt or error
    pub fn run(&mut self, out: &mut dyn OutputSink) -> Ls8Result<()> {
        self.run_with_hook(out, &mut |_| {})
    }

    /// Execute until halt or error, calling `before_step` with the machine
    /// state ahead of every instruction.
    pub fn run_with_hook(
        &mut self,
        out: &mut dyn OutputSink,
        before_step: &mut dyn FnMut(&VirtualMachine),
    ) -> Ls8Result<()> {
        debug!(pc = self.pc, "run started");
        let mut executed: u64 = 0;

        while self.state == VmState::Running {
            if let Some(limit) = self.config.max_steps {
                if executed >= limit {
                    return Err(Ls8Error::StepLimitExceeded(limit));
                }
            }
            before_step(self);
            self.step(out)?;
            executed += 1;
        }

        debug!(pc = self.pc, executed, "halted");
        Ok(())
    }

    /// Execute a single instruction. A halted machine stays halted.
    pub fn step(&mut self, out: &mut dyn OutputSink) -> Ls8Result<VmState> {
        if self.state == VmState::Halted {
            return Ok(VmState::Halted);
        }

        let inst = Instruction::decode(&self.memory, self.pc)?;
        trace!(pc = self.pc, instruction = %inst, "execute");
        self.dispatch(inst, out)?;
        Ok(self.state)
    }

    fn dispatch(&mut self, inst: Instruction, out: &mut dyn OutputSink) -> Ls8Result<()> {
        let a = inst.operand_a();
        let b = inst.operand_b();

        match inst.opcode {
            OpCode::Hlt => self.state = VmState::Halted,

            OpCode::Ldi => self.write_register(a, b)?,

            OpCode::Prn => out.emit(self.registers.get(a)?)?,

            OpCode::Add | OpCode::Mul => {
                let lhs = self.registers.get(a)?;
                let rhs = self.registers.get(b)?;
                let result = Alu::execute(inst.opcode, lhs, rhs)?;
                self.write_register(a, result)?;
            }

            OpCode::Push => {
                let value = self.registers.get(a)?;
                self.stack().push(value)?;
            }

            OpCode::Pop => {
                self.check_writable(a)?;
                let value = self.stack().peek()?;
                self.registers.set(a, value)?;
                self.stack().release()?;
            }

            OpCode::Call => {
                let target = self.registers.get(a)?;
                let return_address = self.pc + inst.opcode.width();
                if return_address >= self.memory.capacity() {
                    return Err(Ls8Error::OutOfBounds(return_address));
                }
                self.stack().push(return_address as u8)?;
                self.pc = target as usize;
            }

            OpCode::Ret => {
                self.pc = self.stack().pop()? as usize;
            }
        }

        if !inst.opcode.sets_pc() {
            self.pc += inst.opcode.width();
        }
        Ok(())
    }

    fn check_writable(&self, index: u8) -> Ls8Result<()> {
        if self.config.protect_stack_pointer && index == STACK_POINTER {
            return Err(Ls8Error::ProtectedRegister(index));
        }
        Ok(())
    }

    fn write_register(&mut self, index: u8, value: u8) -> Ls8Result<()> {
        self.check_writable(index)?;
        self.registers.set(index, value)
    }

    fn stack(&mut self) -> Stack<'_> {
        let floor = self.stack_floor();
        Stack::new(&mut self.memory, &mut self.registers, floor)
    }

    /// Lowest address the stack may grow into
    pub fn stack_floor(&self) -> usize {
        self.config.stack_floor.unwrap_or(self.image_len)
    }

    pub fn config(&self) -> &Ls8Config {
        &self.config
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn state(&self) -> VmState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == VmState::Halted
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn register(&self, index: u8) -> Ls8Result<u8> {
        self.registers.get(index)
    }

    pub fn stack_pointer(&self) -> u8 {
        self.registers.all()[STACK_POINTER as usize]
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}
