//! Scale units and scale bands
//!
//! A [`ScaleUnit`] is the multiplier named by the unit word of an input such as
//! "15 lakhs". A [`ScaleBand`] is one of the four thresholds the decimal
//! summaries are reported against.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Largest value the converter accepts.
///
/// The short-scale word table stops at "trillion", so the highest nameable
/// value is 999 trillion 999 billion ... 999. This is also below 2^53.
pub const MAX_SUPPORTED_VALUE: u64 = 999_999_999_999_999;

/// Multiplier named by an input unit word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleUnit {
    Thousand,
    Lakh,
    Million,
    Crore,
    Billion,
    Trillion,
}

/// Accepted unit words, lower-case
static UNIT_TABLE: Lazy<HashMap<&'static str, ScaleUnit>> = Lazy::new(|| {
    HashMap::from([
        ("thousand", ScaleUnit::Thousand),
        ("k", ScaleUnit::Thousand),
        ("lakh", ScaleUnit::Lakh),
        ("lakhs", ScaleUnit::Lakh),
        ("million", ScaleUnit::Million),
        ("crore", ScaleUnit::Crore),
        ("crores", ScaleUnit::Crore),
        ("billion", ScaleUnit::Billion),
        ("trillion", ScaleUnit::Trillion),
    ])
});

impl ScaleUnit {
    /// Look up a unit word, ignoring ASCII case
    ///
    /// # Examples
    /// ```
    /// use numconv_core::ScaleUnit;
    /// assert_eq!(ScaleUnit::from_suffix("Lakhs"), Some(ScaleUnit::Lakh));
    /// assert_eq!(ScaleUnit::from_suffix("K"), Some(ScaleUnit::Thousand));
    /// assert_eq!(ScaleUnit::from_suffix("zorp"), None);
    /// ```
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        UNIT_TABLE.get(suffix.to_ascii_lowercase().as_str()).copied()
    }

    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Thousand => 1_000,
            Self::Lakh => 100_000,
            Self::Million => 1_000_000,
            Self::Crore => 10_000_000,
            Self::Billion => 1_000_000_000,
            Self::Trillion => 1_000_000_000_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thousand => "thousand",
            Self::Lakh => "lakh",
            Self::Million => "million",
            Self::Crore => "crore",
            Self::Billion => "billion",
            Self::Trillion => "trillion",
        }
    }
}

impl std::fmt::Display for ScaleUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold and label pair used for the decimal summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleBand {
    Lakh,
    Crore,
    Million,
    Billion,
}

impl ScaleBand {
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Lakh => 100_000,
            Self::Crore => 10_000_000,
            Self::Million => 1_000_000,
            Self::Billion => 1_000_000_000,
        }
    }

    /// Label used after a ratio of at least one ("1.50 lakhs", "2.00 million")
    pub fn plural_label(&self) -> &'static str {
        match self {
            Self::Lakh => "lakhs",
            Self::Crore => "crores",
            Self::Million => "million",
            Self::Billion => "billion",
        }
    }

    /// Label used in the below-threshold placeholder ("< 1 lakh")
    pub fn singular_label(&self) -> &'static str {
        match self {
            Self::Lakh => "lakh",
            Self::Crore => "crore",
            Self::Million => "million",
            Self::Billion => "billion",
        }
    }
}
