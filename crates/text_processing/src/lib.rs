//! Number text processing
//!
//! This crate turns informal quantity phrases into integers and integers into
//! readable text:
//! - **Parsing**: "1,000,000", "15 lakhs", "2.5 million" -> `u64`
//! - **Western words**: short-scale English words (thousand, million, ...)
//! - **Indian words**: crore / lakh / thousand segments
//! - **Scaled summaries**: two-decimal ratios to lakh, crore, million, billion
//! - **Digit grouping**: "1000000" -> "1,000,000"
//!
//! # Example
//!
//! ```
//! use numconv_text_processing::{ConversionPipeline, Converter};
//!
//! let pipeline = ConversionPipeline::default();
//! let result = pipeline.convert("15 lakhs").unwrap();
//!
//! assert_eq!(result.original, "1,500,000");
//! assert_eq!(result.indian, "fifteen lakh");
//! assert_eq!(result.millions, "1.50 million");
//! ```

pub mod grouping;
pub mod indian;
pub mod parser;
pub mod summary;
pub mod words;

mod pipeline;

pub use grouping::{group_digits, GROUP_SEPARATOR};
pub use indian::to_indian_words;
pub use parser::{parse_quantity, parse_quantity_with_limit, sanitize_input};
pub use pipeline::{convert, ConversionPipeline, ConverterConfig};
pub use summary::{format_band, ScaledSummary};
pub use words::number_to_words;

pub use numconv_core::{ConversionResult, Converter, ParseFailure, Result};
