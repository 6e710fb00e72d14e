pub mod cli;
pub mod toml_config;

use crate::domain::model::Polarity;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::io::Write;

/// Default speed, matching a bare `--wpm`.
pub const DEFAULT_WPM: i64 = 2;
/// BCM 4, where the LED is expected to be connected.
pub const DEFAULT_PIN: u8 = 4;
/// Highest BCM number on the 40-pin header.
pub const MAX_BCM_PIN: u8 = 27;

/// Which transmitter to build and how the hardware line is wired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub hardware: bool,
    pub pin: u8,
    pub polarity: Polarity,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            hardware: false,
            pin: DEFAULT_PIN,
            polarity: Polarity::default(),
        }
    }
}

/// Fully resolved run settings.
///
/// `wpm` is kept signed: rejecting non-positive rates is the timing
/// policy's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub message: String,
    pub wpm: i64,
    pub output: OutputSettings,
    pub dry_run: bool,
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("message", &self.message)?;
        validate_range("hardware.pin", self.output.pin, 0, MAX_BCM_PIN)?;
        Ok(())
    }
}

/// Write the start-up summary: message, rate, dit length, output target.
pub fn print_status<W: Write>(out: &mut W, settings: &Settings, dit_seconds: f64) -> Result<()> {
    writeln!(out, "Sending message: {}", settings.message)?;
    writeln!(out, "Words per minute: {}", settings.wpm)?;
    writeln!(out, "Dit speed in seconds: {}", dit_seconds)?;
    writeln!(out, "Sending to hardware: {}", settings.output.hardware)?;
    out.flush()?;
    Ok(())
}

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use super::cli::MessageSource;
    use super::toml_config::SenderConfig;
    use super::{OutputSettings, Settings, DEFAULT_PIN, DEFAULT_WPM};
    use crate::domain::model::Polarity;
    use crate::utils::error::Result;
    use clap::{ArgGroup, Parser};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "morse")]
    #[command(about = "Send a message as Morse code to the console or a GPIO pin")]
    #[command(group(ArgGroup::new("input").required(true).args(["message", "file"])))]
    pub struct CliConfig {
        /// The message to send
        #[arg(short = 'm', long)]
        pub message: Option<String>,

        /// A file with the message to send
        #[arg(short = 'f', long)]
        pub file: Option<PathBuf>,

        /// Speed in words per minute (default 2)
        #[arg(
            long,
            num_args = 0..=1,
            default_missing_value = "2",
            allow_negative_numbers = true
        )]
        pub wpm: Option<i64>,

        /// Key a GPIO pin instead of printing to the console
        #[arg(long)]
        pub hw: bool,

        /// BCM number of the output pin (default 4)
        #[arg(long)]
        pub pin: Option<u8>,

        /// The output is keyed by pulling the pin LOW
        #[arg(long)]
        pub active_low: bool,

        /// TOML file with default settings
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Print the Morse rendering without delays or hardware
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn message_source(&self) -> Result<MessageSource> {
            MessageSource::from_options(self.message.clone(), self.file.clone())
        }

        /// Merge flags over the optional config file and read the message.
        pub fn resolve(&self) -> Result<Settings> {
            let file_config = match &self.config {
                Some(path) => SenderConfig::from_file(path)?,
                None => SenderConfig::default(),
            };
            let message = self.message_source()?.read()?;

            let polarity = if self.active_low {
                Polarity::ActiveLow
            } else {
                file_config.hardware.polarity.unwrap_or_default()
            };

            Ok(Settings {
                message,
                wpm: self.wpm.or(file_config.timing.wpm).unwrap_or(DEFAULT_WPM),
                output: OutputSettings {
                    hardware: self.hw || file_config.hardware.enabled.unwrap_or(false),
                    pin: self.pin.or(file_config.hardware.pin).unwrap_or(DEFAULT_PIN),
                    polarity,
                },
                dry_run: self.dry_run,
            })
        }
    }
}
