//! Line-oriented console over any reader/writer pair.
//!
//! The session, prompts and pager talk to a [`Console`] instead of the
//! process's stdin/stdout, so tests drive them with in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use bikeshare_core::error::{BikeshareError, Result};

/// A prompt/answer channel plus the output stream reports are written to.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt`, then read one line of input.
    ///
    /// The line terminator is stripped; nothing else is trimmed. Fails with
    /// [`BikeshareError::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// The output stream.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
