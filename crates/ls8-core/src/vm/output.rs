//! Program Output
//!
//! `PRN` hands register values to an `OutputSink` supplied by the host.

use std::io::Write;

use crate::error::Ls8Result;

/// Receives every value printed by the running program
pub trait OutputSink {
    fn emit(&mut self, value: u8) -> Ls8Result<()>;
}

/// Collects printed values in order
impl OutputSink for Vec<u8> {
    fn emit(&mut self, value: u8) -> Ls8Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Writes each value as a decimal line
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, value: u8) -> Ls8Result<()> {
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }
}
