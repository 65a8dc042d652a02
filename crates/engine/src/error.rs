//! The module contains the errors the engine can return.
//!
//! All of them come from validating user input before it is sent to the
//! remote tables:
//!
//! - [`InvalidAmount`] when an amount can't be parsed or is negative.
//! - [`InvalidDate`] when a date is not a `YYYY-MM-DD` calendar date.
//! - [`InvalidRange`] when a date range ends before it starts.
//! - [`MissingField`] when a required form field is empty.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`InvalidRange`]: EngineError::InvalidRange
//!  [`MissingField`]: EngineError::MissingField
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Invalid kind: {0}")]
    InvalidKind(String),
    #[error("\"{0}\" is required")]
    MissingField(String),
}
