//! Error types for colorsync.
//!
//! The conversion functions themselves never fail; errors only arise when
//! text input (hex strings, model and strategy names, CLI arguments) has to
//! be interpreted.

use thiserror::Error;

/// Errors produced while interpreting color input.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A color model name was not recognized.
    #[error("unknown color model: {0}")]
    UnknownModel(String),

    /// A conversion strategy name was not recognized.
    #[error("unknown conversion strategy: {0}")]
    UnknownStrategy(String),

    /// A color model received the wrong number of channel values.
    #[error("{model} expects {expected} values, got {got}")]
    ArityMismatch {
        model: String,
        expected: usize,
        got: usize,
    },

    /// A channel value was not a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}
