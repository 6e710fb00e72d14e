use crate::utils::error::{MorseError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the message to send comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Text(String),
    File(PathBuf),
}

impl MessageSource {
    /// Exactly one of `text` and `file` must be given.
    pub fn from_options(text: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (text, file) {
            (Some(text), None) => Ok(MessageSource::Text(text)),
            (None, Some(path)) => Ok(MessageSource::File(path)),
            (Some(_), Some(_)) => Err(MorseError::ConfigError {
                message: "a message and a message file are mutually exclusive".to_string(),
            }),
            (None, None) => Err(MorseError::MissingConfigError {
                field: "message or file".to_string(),
            }),
        }
    }

    /// Resolve the message text. File contents have their line breaks removed.
    pub fn read(&self) -> Result<String> {
        match self {
            MessageSource::Text(text) => Ok(text.clone()),
            MessageSource::File(path) => read_message_file(path),
        }
    }
}

fn read_message_file(path: &Path) -> Result<String> {
    tracing::debug!("Reading message from {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(content.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}
