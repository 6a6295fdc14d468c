//! LS-8 Virtual Machine - Core Library
//!
//! Public API surface for the LS-8 core: an 8-bit machine with 256 bytes of
//! memory, eight registers and a small fixed instruction set.

pub mod error;
pub mod config;
pub mod bytecode;
pub mod vm;
pub mod loader;

// Re-export commonly used types
pub use error::{Ls8Error, Ls8Result};
pub use config::Ls8Config;
pub use bytecode::opcode::OpCode;
pub use bytecode::instruction::Instruction;
pub use vm::vm::{VirtualMachine, VmState};
pub use vm::output::{OutputSink, WriterSink};
pub use loader::ProgramLoader;

#[cfg(test)]
mod tests {
	use super::*;

	fn execute(image: &[u8]) -> (VirtualMachine, Vec<u8>) {
		let mut vm = VirtualMachine::with_program(Ls8Config::new(), image).expect("load failed");
		let mut out = Vec::new();
		vm.run(&mut out).expect("execution failed");
		(vm, out)
	}

	#[test]
	fn ldi_then_halt_sets_register() {
		for reg in 0..7u8 {
			for value in [0u8, 1, 127, 128, 255] {
				let (vm, _) = execute(&[OpCode::Ldi as u8, reg, value, OpCode::Hlt as u8]);
				assert_eq!(vm.register(reg), Ok(value));
				assert_eq!(vm.state(), VmState::Halted);
			}
		}
	}

	#[test]
	fn multiply_and_print() {
		let instructions = vec![
			OpCode::Ldi as u8, 0, 8,
			OpCode::Ldi as u8, 1, 9,
			OpCode::Mul as u8, 0, 1,
			OpCode::Prn as u8, 0,
			OpCode::Hlt as u8,
		];
		let (vm, out) = execute(&instructions);
		assert_eq!(out, vec![72]);
		assert!(vm.is_halted());
	}

	#[test]
	fn push_pop_moves_value_between_registers() {
		let instructions = vec![
			OpCode::Ldi as u8, 0, 5,
			OpCode::Push as u8, 0,
			OpCode::Pop as u8, 1,
			OpCode::Hlt as u8,
		];
		let (vm, _) = execute(&instructions);
		assert_eq!(vm.register(1), Ok(5));
		assert_eq!(vm.register(0), Ok(5));
		assert_eq!(vm.stack_pointer(), 0);
	}

	#[test]
	fn push_pop_same_register_is_idempotent() {
		let instructions = vec![
			OpCode::Ldi as u8, 3, 200,
			OpCode::Push as u8, 3,
			OpCode::Ldi as u8, 3, 1,
			OpCode::Pop as u8, 3,
			OpCode::Hlt as u8,
		];
		let (vm, _) = execute(&instructions);
		assert_eq!(vm.register(3), Ok(200));
		assert_eq!(vm.stack_pointer(), 0);
	}

	#[test]
	fn add_wraps_at_eight_bits() {
		let instructions = vec![
			OpCode::Ldi as u8, 0, 255,
			OpCode::Ldi as u8, 1, 2,
			OpCode::Add as u8, 0, 1,
			OpCode::Prn as u8, 0,
			OpCode::Hlt as u8,
		];
		let (vm, out) = execute(&instructions);
		assert_eq!(out, vec![1]);
		assert_eq!(vm.register(1), Ok(2));
	}

	#[test]
	fn unknown_opcode_is_fatal_and_mutates_nothing() {
		let mut vm = VirtualMachine::with_program(Ls8Config::new(), &[0b0000_0000]).unwrap();
		let before = vm.clone();
		let mut out = Vec::new();

		let res = vm.run(&mut out);
		assert_eq!(res, Err(Ls8Error::UnknownOpcode { opcode: 0, address: 0 }));
		assert_eq!(vm, before);
		assert!(out.is_empty());
	}

	#[test]
	fn runs_are_deterministic() {
		let instructions = vec![
			OpCode::Ldi as u8, 0, 3,
			OpCode::Ldi as u8, 1, 15,
			OpCode::Call as u8, 1,
			OpCode::Prn as u8, 0,
			OpCode::Push as u8, 0,
			OpCode::Pop as u8, 2,
			OpCode::Hlt as u8,
			// 15: subroutine doubling R0 twice
			OpCode::Add as u8, 0, 0,
			OpCode::Prn as u8, 0,
			OpCode::Add as u8, 0, 0,
			OpCode::Ret as u8,
		];
		assert_eq!(instructions[15], OpCode::Add as u8);

		let (first, first_out) = execute(&instructions);
		let (second, second_out) = execute(&instructions);
		assert_eq!(first_out, vec![6, 12]);
		assert_eq!(first_out, second_out);
		assert_eq!(first, second);
		assert_eq!(first.register(2), Ok(12));
	}

	#[test]
	fn loaded_text_program_runs() {
		let text = "\
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";
		let image = ProgramLoader::parse(text).unwrap();
		let mut vm = VirtualMachine::with_program(Ls8Config::new(), &image).unwrap();
		let mut sink = WriterSink::new(Vec::new());
		vm.run(&mut sink).unwrap();
		assert_eq!(sink.into_inner(), b"72\n");
	}
}
