//! Error types for parameter handling and driver setup

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpiralError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid number for {key}: {raw:?}")]
    InvalidNumber { key: &'static str, raw: String },

    #[error("Non-finite value for {key}")]
    NonFinite { key: &'static str },

    #[error("Phase step must be finite, got {0}")]
    InvalidPhaseStep(f64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SpiralError>;
