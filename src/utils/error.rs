use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorseError {
    #[error("Unknown character {character:?}: no Morse code mapping")]
    UnknownCharacter { character: char },

    #[error("Invalid rate: words per minute must be positive, got {wpm}")]
    InvalidRate { wpm: i64 },

    #[error("Hardware unavailable: {reason}")]
    HardwareUnavailable { reason: String },

    #[error("Hardware fault: {message}")]
    HardwareFault { message: String },

    #[error("Transmission cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl MorseError {
    /// One-line hint shown under the error message by the CLI.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MorseError::UnknownCharacter { .. } => {
                "Only letters a-z, digits 0-9 and spaces can be sent"
            }
            MorseError::InvalidRate { .. } => "Pass a positive value to --wpm",
            MorseError::HardwareUnavailable { .. } => {
                "Run on a Raspberry Pi with a build that enables the `rpi` feature, or drop --hw"
            }
            MorseError::HardwareFault { .. } => "Check the wiring and permissions of the output pin",
            MorseError::Cancelled => "Transmission was interrupted; run again to resend",
            MorseError::IoError(_) => "Check that the message file exists and is readable",
            MorseError::ConfigError { .. }
            | MorseError::InvalidConfigValueError { .. }
            | MorseError::MissingConfigError { .. } => "Review the command line flags and config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, MorseError>;
