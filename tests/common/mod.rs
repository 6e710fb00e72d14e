#![allow(dead_code)]

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use morse_sender::{MorseError, Result, Signal, Sleeper, Transmitter};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// One call made on a [`RecordingTransmitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Transmit(Signal),
    EndOfCharacter,
    EndOfWord,
}

/// Records every call instead of pausing.
#[derive(Debug, Default)]
pub struct RecordingTransmitter {
    pub calls: Vec<Call>,
}

impl RecordingTransmitter {
    pub fn count(&self, call: Call) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }
}

impl Transmitter for RecordingTransmitter {
    fn transmit(&mut self, signal: Signal) -> Result<()> {
        self.calls.push(Call::Transmit(signal));
        Ok(())
    }

    fn end_of_character(&mut self) -> Result<()> {
        self.calls.push(Call::EndOfCharacter);
        Ok(())
    }

    fn end_of_word(&mut self) -> Result<()> {
        self.calls.push(Call::EndOfWord);
        Ok(())
    }
}

/// Logs requested pauses without sleeping. Clones share the log.
///
/// With `fail_after` set, the sleep with that index (0-based) and every
/// later one fail with `Cancelled`.
#[derive(Debug, Clone, Default)]
pub struct RecordingSleeper {
    pub log: Rc<RefCell<Vec<Duration>>>,
    pub fail_after: Option<usize>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(sleeps: usize) -> Self {
        Self {
            log: Rc::default(),
            fail_after: Some(sleeps),
        }
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.log.borrow().clone()
    }

    /// Pauses expressed as multiples of `unit`.
    pub fn units(&self, unit: Duration) -> Vec<u32> {
        self.log
            .borrow()
            .iter()
            .map(|d| (d.as_nanos() / unit.as_nanos()) as u32)
            .collect()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if self.fail_after.is_some_and(|limit| log.len() >= limit) {
            return Err(MorseError::Cancelled);
        }
        log.push(duration);
        Ok(())
    }
}

/// Observable state of a [`MockPin`].
#[derive(Debug, Default)]
pub struct PinState {
    pub high: bool,
    /// Every level written, in order.
    pub writes: Vec<bool>,
    pub releases: u32,
    /// Fail the n-th (1-based) `set_high` call.
    pub fail_on_set_high: Option<usize>,
    pub set_high_calls: usize,
}

/// An output pin whose level, write history and release count can be
/// inspected after the transmitter that owns it is gone.
pub struct MockPin {
    state: Rc<RefCell<PinState>>,
}

impl MockPin {
    /// Starts HIGH so tests can see construction drive it to idle.
    pub fn new() -> (Self, Rc<RefCell<PinState>>) {
        let state = Rc::new(RefCell::new(PinState {
            high: true,
            ..PinState::default()
        }));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }

    pub fn failing_on_pulse(pulse: usize) -> (Self, Rc<RefCell<PinState>>) {
        let (pin, state) = Self::new();
        state.borrow_mut().fail_on_set_high = Some(pulse);
        (pin, state)
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> std::result::Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.high = false;
        state.writes.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> std::result::Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.set_high_calls += 1;
        if state.fail_on_set_high == Some(state.set_high_calls) {
            return Err(ErrorKind::Other);
        }
        state.high = true;
        state.writes.push(true);
        Ok(())
    }
}

impl Drop for MockPin {
    fn drop(&mut self) {
        self.state.borrow_mut().releases += 1;
    }
}
