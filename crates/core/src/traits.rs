//! Converter trait
//!
//! The presentation layer only depends on this trait, so the conversion
//! pipeline can be swapped or mocked in tests.

use crate::{ConversionResult, Result, MAX_SUPPORTED_VALUE};

/// Turns a raw input string into a [`ConversionResult`]
///
/// Implementations are pure: the same input always yields the same output and
/// no state is shared between calls.
pub trait Converter: Send + Sync {
    /// Parse and format the raw input
    fn convert(&self, input: &str) -> Result<ConversionResult>;

    /// Largest value this converter accepts
    fn max_value(&self) -> u64 {
        MAX_SUPPORTED_VALUE
    }

    /// Name for logging
    fn name(&self) -> &str {
        "converter"
    }
}
