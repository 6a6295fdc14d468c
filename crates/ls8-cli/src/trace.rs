//! Execution trace formatting
//!
//! `TRACE: PC | M[PC] M[PC+1] M[PC+2] | R0 .. R7` in two-digit hex.

use std::fmt::Write;

use ls8_core::VirtualMachine;

pub fn trace_line(vm: &VirtualMachine) -> String {
    let pc = vm.pc();
    let memory = vm.memory();
    // Cells past the end of memory show as zero
    let cell = |address: usize| memory.read(address).unwrap_or(0);

    let mut line = format!(
        "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
        pc,
        cell(pc),
        cell(pc + 1),
        cell(pc + 2)
    );

    for value in vm.registers().all() {
        let _ = write!(line, " {:02X}", value);
    }
    line
}
