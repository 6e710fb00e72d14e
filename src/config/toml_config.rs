use crate::domain::model::Polarity;
use crate::utils::error::{MorseError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults loaded from a TOML file. Command line flags take precedence.
///
/// ```toml
/// [timing]
/// wpm = 12
///
/// [hardware]
/// enabled = true
/// pin = 4
/// polarity = "active-low"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SenderConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub hardware: HardwareConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub wpm: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareConfig {
    pub enabled: Option<bool>,
    /// BCM pin number.
    pub pin: Option<u8>,
    pub polarity: Option<Polarity>,
}

impl SenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(MorseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MorseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}
