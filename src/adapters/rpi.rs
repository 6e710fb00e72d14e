//! Raspberry Pi output line via `rppal`.

use crate::domain::model::Polarity;
use crate::utils::error::{MorseError, Result};
use rppal::gpio::{Gpio, OutputPin};

/// Open BCM pin `pin` as an output already at its idle level.
///
/// The GPIO peripheral is probed first, so nothing is written when the
/// platform has no GPIO interface.
pub fn open_output_line(pin: u8, polarity: Polarity) -> Result<OutputPin> {
    let gpio = Gpio::new().map_err(|e| MorseError::HardwareUnavailable {
        reason: format!("cannot open GPIO interface: {}", e),
    })?;
    let pin_handle = gpio.get(pin).map_err(|e| MorseError::HardwareUnavailable {
        reason: format!("cannot claim GPIO {}: {}", pin, e),
    })?;

    let mut line = if polarity.level(false) {
        pin_handle.into_output_high()
    } else {
        pin_handle.into_output_low()
    };
    line.set_reset_on_drop(true);

    tracing::info!("Claimed GPIO {} for output", pin);
    Ok(line)
}
