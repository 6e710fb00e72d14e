use serde::{Deserialize, Serialize};
use std::fmt;

/// A single Morse element.
///
/// The numeric values (dot = 0, dash = 1) are what the debug tooling
/// and existing fixtures use, so the discriminants are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Signal {
    Dot = 0,
    Dash = 1,
}

impl Signal {
    /// Length of the element in dit units.
    pub fn units(self) -> u32 {
        match self {
            Signal::Dot => 1,
            Signal::Dash => 3,
        }
    }

    /// Console symbol for the element.
    pub fn symbol(self) -> char {
        match self {
            Signal::Dot => '.',
            Signal::Dash => '-',
        }
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal as u8
    }
}

impl TryFrom<u8> for Signal {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Signal::Dot),
            1 => Ok(Signal::Dash),
            other => Err(other),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How the output pin is wired.
///
/// Active-high lines key on HIGH and idle LOW; active-low lines are the
/// reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Electrical level (`true` = HIGH) that corresponds to a keyed line.
    pub fn level(self, keyed: bool) -> bool {
        match self {
            Polarity::ActiveHigh => keyed,
            Polarity::ActiveLow => !keyed,
        }
    }
}
