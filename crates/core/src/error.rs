//! Conversion error type
//!
//! Every way a raw input can be rejected is a variant of [`ParseFailure`].
//! Callers treat it as a single error kind; the variant only refines the
//! message.

use thiserror::Error;

/// User-facing suggestion shown whenever an input is rejected
pub const FORMAT_HINT: &str = "Please enter a valid number (e.g., 1000000, 15 lakhs, 40 million)";

/// Raised when a raw input cannot be turned into a non-negative integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("Input is empty")]
    Empty,

    #[error("'{0}' is not a valid integer")]
    InvalidNumeral(String),

    #[error("'{0}' does not match the <number> <unit> format")]
    Malformed(String),

    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    #[error("Negative values are not supported: '{0}'")]
    Negative(String),

    #[error("{value} exceeds the maximum supported value {max}")]
    OutOfRange { value: String, max: u64 },
}

impl ParseFailure {
    /// Suggestion of valid input formats for the user
    pub fn hint(&self) -> &'static str {
        FORMAT_HINT
    }

    /// Short machine-readable reason, used as a metrics label
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::InvalidNumeral(_) => "invalid_numeral",
            Self::Malformed(_) => "malformed",
            Self::UnknownUnit(_) => "unknown_unit",
            Self::Negative(_) => "negative",
            Self::OutOfRange { .. } => "out_of_range",
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseFailure>;
