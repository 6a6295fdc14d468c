//! Program Loader
//!
//! Parses the textual program format into a memory image.
//!
//! One byte per line, written in base 2. Anything from a `#` to the end of
//! the line is a comment; lines that are empty once comments and whitespace
//! are stripped are skipped.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::MEMORY_SIZE;
use crate::error::{Ls8Error, Ls8Result};

const COMMENT_MARKER: char = '#';

/// Program loader
pub struct ProgramLoader;

impl ProgramLoader {
    /// Parse program text into bytes destined for addresses 0, 1, 2, ...
    pub fn parse(text: &str) -> Ls8Result<Vec<u8>> {
        let mut image = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let code = match line.split_once(COMMENT_MARKER) {
                Some((code, _comment)) => code,
                None => line,
            }
            .trim();

            if code.is_empty() {
                continue;
            }

            let byte = u8::from_str_radix(code, 2).map_err(|_| Ls8Error::InvalidBinaryLiteral {
                line: idx + 1,
                text: code.to_string(),
            })?;
            image.push(byte);

            if image.len() > MEMORY_SIZE {
                return Err(Ls8Error::ProgramTooLarge {
                    size: image.len(),
                    capacity: MEMORY_SIZE,
                });
            }
        }

        Ok(image)
    }

    /// Read and parse a program file
    pub fn load_file(path: impl AsRef<Path>) -> Ls8Result<Vec<u8>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Ls8Error::LoadFailure {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let image = Self::parse(&text)?;
        debug!(path = %path.display(), bytes = image.len(), "program parsed");
        Ok(image)
    }
}
