//! Console transmitter.
//!
//! Writes `.` and `-` for elements, ` / ` after each character and `/ `
//! after each word (` / ` when the word gap opens the output), and a
//! newline when closed:
//!
//! ```text
//! .... / .. / / - / .... / . / .-. / . / /
//! ```

use crate::core::timing::{ParisTiming, ThreadSleeper};
use crate::domain::model::Signal;
use crate::domain::ports::{Sleeper, Transmitter};
use crate::utils::error::Result;
use std::io::{self, Write};

pub const CHARACTER_SEPARATOR: &str = " / ";
pub const WORD_SEPARATOR: &str = "/ ";

pub struct DebugTransmitter<W: Write, S: Sleeper = ThreadSleeper> {
    out: W,
    timing: ParisTiming<S>,
    after_space: bool,
    closed: bool,
}

impl<S: Sleeper> DebugTransmitter<io::Stdout, S> {
    pub fn stdout(timing: ParisTiming<S>) -> Self {
        Self::new(io::stdout(), timing)
    }
}

impl<W: Write, S: Sleeper> DebugTransmitter<W, S> {
    pub fn new(out: W, timing: ParisTiming<S>) -> Self {
        Self {
            out,
            timing,
            after_space: false,
            closed: false,
        }
    }

    fn output(&mut self, symbol: &str) -> Result<()> {
        self.out.write_all(symbol.as_bytes())?;
        self.out.flush()?;
        self.after_space = symbol.ends_with(' ');
        Ok(())
    }
}

impl<W: Write, S: Sleeper> Transmitter for DebugTransmitter<W, S> {
    fn transmit(&mut self, signal: Signal) -> Result<()> {
        let mut buf = [0u8; 4];
        self.output(signal.symbol().encode_utf8(&mut buf))?;
        self.timing.pause_for_dot_or_dash(signal)?;
        self.timing.pause_after_dot_or_dash()
    }

    fn end_of_character(&mut self) -> Result<()> {
        self.output(CHARACTER_SEPARATOR)?;
        self.timing.pause_after_character()
    }

    fn end_of_word(&mut self) -> Result<()> {
        // Every `/` is padded on both sides.
        let separator = if self.after_space {
            WORD_SEPARATOR
        } else {
            CHARACTER_SEPARATOR
        };
        self.output(separator)?;
        self.timing.pause_after_word()
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.output("\n")
    }
}

impl<W: Write, S: Sleeper> Drop for DebugTransmitter<W, S> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!("Failed to finish debug output: {}", e);
        }
    }
}
