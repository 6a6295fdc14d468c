//! LS-8 Configuration
//!
//! Defines runtime limits and policies for the LS-8 virtual machine.
//! Configuration specifies constraints only; enforcement is handled by the VM.

/// Number of addressable memory cells
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer
pub const STACK_POINTER: u8 = 7;

/// VM Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ls8Config {
    /// Reject register-targeting instructions (LDI, ADD, MUL, POP) aimed at
    /// the stack pointer. Stack instructions still move it.
    pub protect_stack_pointer: bool,

    /// Lowest address the stack may occupy. `None` uses the length of the
    /// loaded program image.
    pub stack_floor: Option<usize>,

    /// Maximum number of instructions a single `run` may execute
    pub max_steps: Option<u64>,
}

impl Ls8Config {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protected_stack_pointer(mut self) -> Self {
        self.protect_stack_pointer = true;
        self
    }

    pub fn with_stack_floor(mut self, floor: usize) -> Self {
        self.stack_floor = Some(floor);
        self
    }

    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }
}
