//! Reading Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("font size {value} out of range [{min}, {max}]")]
    FontSizeOutOfRange { value: i64, min: u32, max: u32 },

    #[error("font size is not a number: {0}")]
    FontSizeNotANumber(String),

    #[error("unknown value for {key}: {value}")]
    UnknownValue { key: &'static str, value: String },

    #[error("unknown preference key: {0}")]
    UnknownKey(String),
}
