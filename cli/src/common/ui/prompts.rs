//! # Console Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! Line-oriented console I/O for the conversation. `Console` is generic over
//! its reader and writer so a whole session can be scripted in tests with a
//! byte slice for input and a `Vec<u8>` for output.
//!
use crate::core::error::{HollowError, Result};
use std::io::{BufRead, Write};

/// A blocking prompt/print pair over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` without a newline and reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing line break is removed
    /// but other whitespace is kept; callers decide whether to trim. Bytes
    /// that are not valid UTF-8 become U+FFFD.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label).map_err(HollowError::from)?;
        self.output.flush().map_err(HollowError::from)?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(HollowError::from)?;
        if read == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Same as `prompt`, but end of input reads as an empty answer.
    pub fn prompt_or_empty(&mut self, label: &str) -> Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    /// Prints one full line.
    pub fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(HollowError::from)?;
        Ok(())
    }
}
