//! LS-8 Virtual Machine - CLI
//!
//! Command-line interface to run LS-8 programs.
//!
//! Exit status: 0 after a clean halt, 2 when the program cannot be loaded,
//! 1 for any error raised while it runs.

mod trace;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ls8_core::{Ls8Config, ProgramLoader, VirtualMachine, WriterSink};

const SUCCESS: u8 = 0;
const RUNTIME_FAILURE: u8 = 1;
const LOAD_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "ls8", version, about = "Run an LS-8 program")]
struct Cli {
    /// Program file: one base-2 byte per line, `#` starts a comment
    program: PathBuf,

    /// Print machine state to stderr before every instruction
    #[arg(long)]
    trace: bool,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Reject LDI/ADD/MUL/POP writes aimed at the stack pointer (R7)
    #[arg(long = "protect-sp")]
    protect_sp: bool,

    /// Lowest address the stack may grow into [default: end of program]
    #[arg(long, value_name = "ADDR")]
    stack_floor: Option<usize>,

    /// Abort after executing this many instructions
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,
}

impl Cli {
    fn config(&self) -> Ls8Config {
        Ls8Config {
            protect_stack_pointer: self.protect_sp,
            stack_floor: self.stack_floor,
            max_steps: self.max_steps,
        }
    }
}

fn setup_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logger(cli.verbose);
    ExitCode::from(run(&cli))
}

/// Load and run the program, returning the process exit status
fn run(cli: &Cli) -> u8 {
    let image = match ProgramLoader::load_file(&cli.program) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: failed to load program: {}", e);
            return LOAD_FAILURE;
        }
    };

    match execute(cli, &image) {
        Ok(()) => SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            RUNTIME_FAILURE
        }
    }
}

fn execute(cli: &Cli, image: &[u8]) -> Result<()> {
    let mut vm = VirtualMachine::with_program(cli.config(), image)
        .context("program image rejected")?;
    debug!(config = ?vm.config(), stack_floor = vm.stack_floor(), "machine ready");

    let stdout = io::stdout();
    let mut sink = WriterSink::new(stdout.lock());

    let result = if cli.trace {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        vm.run_with_hook(&mut sink, &mut |vm| {
            // A closed stderr must not stop the program
            writeln!(err, "{}", trace::trace_line(vm)).ok();
        })
    } else {
        vm.run(&mut sink)
    };

    let flushed = sink.into_inner().flush();
    result.with_context(|| format!("execution stopped at pc 0x{:02X}", vm.pc()))?;
    flushed.context("failed to flush program output")
}
