//! Scaled decimal summaries
//!
//! Each band reports the value as a two-decimal ratio to its threshold, or a
//! fixed placeholder when the value is below it.

use numconv_core::ScaleBand;
use serde::{Deserialize, Serialize};

/// Ratios of one value to lakh, crore, million and billion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledSummary {
    pub lakhs: String,
    pub crores: String,
    pub millions: String,
    pub billions: String,
}

impl ScaledSummary {
    pub fn new(n: u64) -> Self {
        Self {
            lakhs: format_band(n, ScaleBand::Lakh),
            crores: format_band(n, ScaleBand::Crore),
            millions: format_band(n, ScaleBand::Million),
            billions: format_band(n, ScaleBand::Billion),
        }
    }
}

/// Format `n / threshold` with two decimals (rounded half up) and the plural
/// label, or `"< 1 {unit}"` below the threshold
///
/// # Examples
/// ```
/// use numconv_core::ScaleBand;
/// use numconv_text_processing::format_band;
///
/// assert_eq!(format_band(99_999, ScaleBand::Lakh), "< 1 lakh");
/// assert_eq!(format_band(100_000, ScaleBand::Lakh), "1.00 lakhs");
/// assert_eq!(format_band(2_500_000, ScaleBand::Million), "2.50 million");
/// ```
pub fn format_band(n: u64, band: ScaleBand) -> String {
    let threshold = band.threshold();
    if n < threshold {
        return format!("< 1 {}", band.singular_label());
    }

    let threshold = u128::from(threshold);
    let hundredths = (u128::from(n) * 100 + threshold / 2) / threshold;
    format!(
        "{}.{:02} {}",
        hundredths / 100,
        hundredths % 100,
        band.plural_label()
    )
}
