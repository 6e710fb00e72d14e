//! GPIO transmitter: keys an LED or buzzer on a digital output line.
//!
//! The line is owned exclusively. It is put in its idle level when the
//! transmitter is built, returned to idle after every element even when the
//! hold is interrupted, and forced idle and released exactly once on close
//! or drop.

use crate::core::timing::{ParisTiming, ThreadSleeper};
use crate::domain::model::{Polarity, Signal};
use crate::domain::ports::{Sleeper, Transmitter};
use crate::utils::error::{MorseError, Result};
use embedded_hal::digital::OutputPin;

pub struct GpioTransmitter<P: OutputPin, S: Sleeper = ThreadSleeper> {
    line: Option<P>,
    polarity: Polarity,
    timing: ParisTiming<S>,
}

impl<P: OutputPin, S: Sleeper> GpioTransmitter<P, S> {
    /// Take ownership of `line` and drive it to its idle level.
    ///
    /// On failure the line is dropped (released) before the error returns.
    pub fn new(line: P, polarity: Polarity, timing: ParisTiming<S>) -> Result<Self> {
        let mut transmitter = Self {
            line: Some(line),
            polarity,
            timing,
        };
        transmitter.set_keyed(false)?;
        tracing::debug!("GPIO line acquired ({:?}), idle", polarity);
        Ok(transmitter)
    }

    pub fn is_closed(&self) -> bool {
        self.line.is_none()
    }

    fn set_keyed(&mut self, keyed: bool) -> Result<()> {
        let level = self.polarity.level(keyed);
        let line = self.line.as_mut().ok_or_else(|| MorseError::HardwareFault {
            message: "GPIO line already released".to_string(),
        })?;
        let written = if level { line.set_high() } else { line.set_low() };
        written.map_err(|e| MorseError::HardwareFault {
            message: format!("failed to drive GPIO line {}: {:?}", if level { "high" } else { "low" }, e),
        })
    }
}

impl<P: OutputPin, S: Sleeper> Transmitter for GpioTransmitter<P, S> {
    fn transmit(&mut self, signal: Signal) -> Result<()> {
        if let Err(e) = self.set_keyed(true) {
            // Keying may have partially succeeded; make sure the line is idle.
            let _ = self.set_keyed(false);
            return Err(e);
        }
        let held = self.timing.pause_for_dot_or_dash(signal);
        self.set_keyed(false)?;
        held?;
        self.timing.pause_after_dot_or_dash()
    }

    fn end_of_character(&mut self) -> Result<()> {
        self.timing.pause_after_character()
    }

    fn end_of_word(&mut self) -> Result<()> {
        self.timing.pause_after_word()
    }

    fn close(&mut self) -> Result<()> {
        if self.line.is_none() {
            return Ok(());
        }
        let idle = self.set_keyed(false);
        // Dropping the handle hands the pin back to the platform.
        drop(self.line.take());
        tracing::debug!("GPIO line released");
        idle
    }
}

impl<P: OutputPin, S: Sleeper> Drop for GpioTransmitter<P, S> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!("Failed to idle GPIO line during release: {}", e);
        }
    }
}
