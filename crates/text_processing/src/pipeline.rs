//! Conversion pipeline
//!
//! Raw input -> parser -> integer -> every formatter -> `ConversionResult`.

use numconv_core::{ConversionResult, Converter, Result, MAX_SUPPORTED_VALUE};
use serde::{Deserialize, Serialize};

use crate::{
    grouping::group_digits, indian::to_indian_words, parser::parse_quantity_with_limit,
    summary::ScaledSummary, words::number_to_words,
};

/// Conversion pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Largest accepted value
    #[serde(default = "default_max_value")]
    pub max_value: u64,
}

fn default_max_value() -> u64 {
    MAX_SUPPORTED_VALUE
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
        }
    }
}

/// Stateless converter; every call parses and formats from scratch
#[derive(Debug, Clone, Default)]
pub struct ConversionPipeline {
    config: ConverterConfig,
}

impl ConversionPipeline {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Produce every representation of an already parsed value
    pub fn format(&self, value: u64) -> ConversionResult {
        let summary = ScaledSummary::new(value);

        ConversionResult {
            value,
            original: group_digits(value),
            words: number_to_words(value),
            indian: to_indian_words(value),
            lakhs: summary.lakhs,
            crores: summary.crores,
            millions: summary.millions,
            billions: summary.billions,
        }
    }
}

impl Converter for ConversionPipeline {
    fn convert(&self, input: &str) -> Result<ConversionResult> {
        let value = match parse_quantity_with_limit(input, self.config.max_value) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(input = %input, reason = e.reason(), "Rejected input: {}", e);
                return Err(e);
            },
        };

        tracing::debug!(input = %input, value, "Parsed quantity");
        Ok(self.format(value))
    }

    fn max_value(&self) -> u64 {
        self.config.max_value
    }

    fn name(&self) -> &str {
        "conversion_pipeline"
    }
}

/// Convert a raw input with the default configuration
///
/// # Examples
/// ```
/// let result = numconv_text_processing::convert("40 million").unwrap();
/// assert_eq!(result.words, "forty million");
/// assert_eq!(result.indian, "four crore");
/// assert_eq!(result.crores, "4.00 crores");
/// ```
pub fn convert(input: &str) -> Result<ConversionResult> {
    ConversionPipeline::default().convert(input)
}
