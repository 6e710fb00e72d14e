// Adapters layer: concrete transmitters for the console and GPIO hardware.

pub mod debug;
pub mod gpio;
#[cfg(feature = "rpi")]
pub mod rpi;

pub use debug::DebugTransmitter;
pub use gpio::GpioTransmitter;

use crate::config::OutputSettings;
use crate::core::timing::ParisTiming;
use crate::domain::ports::{Sleeper, Transmitter};
use crate::utils::error::Result;

/// Build the transmitter selected by `output`.
///
/// Requesting hardware never falls back to the console: if the GPIO line
/// cannot be acquired this fails with `HardwareUnavailable`.
pub fn build_transmitter<S: Sleeper + 'static>(
    output: &OutputSettings,
    timing: ParisTiming<S>,
) -> Result<Box<dyn Transmitter>> {
    if output.hardware {
        build_hardware(output, timing)
    } else {
        tracing::debug!("Using console transmitter");
        Ok(Box::new(DebugTransmitter::stdout(timing)))
    }
}

#[cfg(feature = "rpi")]
fn build_hardware<S: Sleeper + 'static>(
    output: &OutputSettings,
    timing: ParisTiming<S>,
) -> Result<Box<dyn Transmitter>> {
    let line = rpi::open_output_line(output.pin, output.polarity)?;
    Ok(Box::new(GpioTransmitter::new(line, output.polarity, timing)?))
}

#[cfg(not(feature = "rpi"))]
fn build_hardware<S: Sleeper + 'static>(
    output: &OutputSettings,
    _timing: ParisTiming<S>,
) -> Result<Box<dyn Transmitter>> {
    Err(crate::utils::error::MorseError::HardwareUnavailable {
        reason: format!(
            "GPIO {} requested but this build has no GPIO backend (enable the `rpi` feature)",
            output.pin
        ),
    })
}
