//! Error types for tracker construction and configuration loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Failed to parse tracker config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to read tracker config: {0}")]
    ConfigIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
