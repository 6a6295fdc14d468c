pub mod alu;
pub mod memory;
pub mod output;
pub mod registers;
pub mod stack;
pub mod vm;

pub use memory::Memory;
pub use output::{OutputSink, WriterSink};
pub use registers::Registers;
pub use vm::{VirtualMachine, VmState};
