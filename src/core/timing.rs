//! PARIS timing: turns a words-per-minute rate into real pauses.
//!
//! The reference word "PARIS" is 50 dit units long, so one unit lasts
//! `60 / (50 * wpm)` seconds. Gaps are expressed in those units:
//!
//! | event                    | units |
//! |--------------------------|-------|
//! | dot                      | 1     |
//! | dash                     | 3     |
//! | after each element       | 1     |
//! | after a character        | 2 (3 with the element gap before it) |
//! | after a word             | 7     |

use crate::core::cancel::{CancelToken, DEFAULT_CANCEL_POLL};
use crate::domain::model::Signal;
use crate::domain::ports::Sleeper;
use crate::utils::error::{MorseError, Result};
use std::thread;
use std::time::{Duration, Instant};

/// Units in the PARIS reference word.
pub const PARIS_WORD_UNITS: u64 = 50;
pub const INTRA_CHARACTER_UNITS: u32 = 1;
/// Added on top of the intra-character gap already paid after the last element.
pub const INTER_CHARACTER_UNITS: u32 = 2;
pub const INTER_WORD_UNITS: u32 = 7;

const NANOS_PER_MINUTE: u64 = 60_000_000_000;

/// Sleeps on the current thread, optionally giving up when a token is cancelled.
#[derive(Debug, Clone)]
pub struct ThreadSleeper {
    cancel: Option<CancelToken>,
    poll: Duration,
}

impl ThreadSleeper {
    pub fn new() -> Self {
        Self {
            cancel: None,
            poll: DEFAULT_CANCEL_POLL,
        }
    }

    pub fn with_cancel(token: CancelToken) -> Self {
        Self {
            cancel: Some(token),
            poll: DEFAULT_CANCEL_POLL,
        }
    }
}

impl Default for ThreadSleeper {
    fn default() -> Self {
        Self::new()
    }
}

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) -> Result<()> {
        let Some(token) = &self.cancel else {
            thread::sleep(duration);
            return Ok(());
        };

        // Sleep in slices against a fixed deadline so polling adds no drift.
        let deadline = Instant::now() + duration;
        loop {
            if token.is_cancelled() {
                return Err(MorseError::Cancelled);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            thread::sleep((deadline - now).min(self.poll));
        }
    }
}

/// Returns immediately. Used for dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Sleeper for NoDelay {
    fn sleep(&mut self, _duration: Duration) -> Result<()> {
        Ok(())
    }
}

/// PARIS-standard timing policy.
#[derive(Debug)]
pub struct ParisTiming<S: Sleeper = ThreadSleeper> {
    wpm: u32,
    unit: Duration,
    sleeper: S,
}

impl<S: Sleeper> ParisTiming<S> {
    /// Fails with [`MorseError::InvalidRate`] unless `wpm` is positive and
    /// small enough to leave a non-zero unit.
    pub fn new(wpm: i64, sleeper: S) -> Result<Self> {
        let invalid = || MorseError::InvalidRate { wpm };

        let rate = u64::try_from(wpm).ok().filter(|&w| w > 0).ok_or_else(invalid)?;
        let unit_nanos = PARIS_WORD_UNITS
            .checked_mul(rate)
            .map(|units_per_minute| NANOS_PER_MINUTE / units_per_minute)
            .filter(|&nanos| nanos > 0)
            .ok_or_else(invalid)?;
        let wpm_u32 = u32::try_from(rate).map_err(|_| invalid())?;

        tracing::debug!("PARIS timing at {} wpm: unit = {} ns", wpm_u32, unit_nanos);

        Ok(Self {
            wpm: wpm_u32,
            unit: Duration::from_nanos(unit_nanos),
            sleeper,
        })
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    /// Length of one dit.
    pub fn unit_duration(&self) -> Duration {
        self.unit
    }

    /// Length of one dit in seconds, for status output.
    pub fn unit_seconds(&self) -> f64 {
        60.0 / (PARIS_WORD_UNITS as f64 * f64::from(self.wpm))
    }

    /// Hold for the element itself: 1 unit for a dot, 3 for a dash.
    pub fn pause_for_dot_or_dash(&mut self, signal: Signal) -> Result<()> {
        self.pause(signal.units())
    }

    pub fn pause_after_dot_or_dash(&mut self) -> Result<()> {
        self.pause(INTRA_CHARACTER_UNITS)
    }

    pub fn pause_after_character(&mut self) -> Result<()> {
        self.pause(INTER_CHARACTER_UNITS)
    }

    pub fn pause_after_word(&mut self) -> Result<()> {
        self.pause(INTER_WORD_UNITS)
    }

    fn pause(&mut self, units: u32) -> Result<()> {
        self.sleeper.sleep(self.unit * units)
    }
}
