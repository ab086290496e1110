//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! an invalid clustering radius, invalid configuration, grouping output that
//! is not a partition, unparsable lineup attributes, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid radius {radius}: must be a non-negative number")]
    InvalidRadius { radius: f32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid grouping: {0}")]
    InvalidGrouping(String),

    #[error("unknown utility type '{value}'")]
    UnknownUtilityType { value: String },

    #[error("unknown side '{value}'")]
    UnknownSide { value: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
