//! Core traits and types for the number converter
//!
//! This crate provides the foundational types shared by every other crate:
//! - Scale units (thousand, lakh, crore, million, ...) and their multipliers
//! - Scale bands used for the decimal summaries
//! - The conversion result record
//! - The single parse failure type
//! - The `Converter` trait the presentation layer calls into

pub mod conversion;
pub mod error;
pub mod scale;
pub mod traits;

pub use conversion::ConversionResult;
pub use error::{ParseFailure, Result, FORMAT_HINT};
pub use scale::{ScaleBand, ScaleUnit, MAX_SUPPORTED_VALUE};
pub use traits::Converter;
