pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{build_transmitter, DebugTransmitter, GpioTransmitter};
pub use config::{OutputSettings, Settings};
pub use self::core::{
    cancel::CancelToken,
    driver::MorseDriver,
    timing::{NoDelay, ParisTiming, ThreadSleeper},
};
pub use domain::model::{Polarity, Signal};
pub use domain::ports::{Sleeper, Transmitter};
pub use utils::error::{MorseError, Result};
