//! Quantity parsing
//!
//! Accepts either a plain numeral ("1,000,000") or a number followed by a
//! scale unit ("15 lakhs", "2.5 million", "40k").
//!
//! # Example
//!
//! ```
//! use numconv_text_processing::parser::parse_quantity;
//!
//! assert_eq!(parse_quantity("15 lakhs"), Ok(1_500_000));
//! assert_eq!(parse_quantity("2.5 million"), Ok(2_500_000));
//! assert_eq!(parse_quantity("1,000,000"), Ok(1_000_000));
//! assert!(parse_quantity("5 zorp").is_err());
//! ```

use numconv_core::{ParseFailure, Result, ScaleUnit, MAX_SUPPORTED_VALUE};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::grouping::GROUP_SEPARATOR;

/// `<digits>[.<digits>] <optional space> <letters>`, applied to lower-cased input
static QUANTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)(?:\.([0-9]+))?\s*([a-z]+)$").expect("quantity pattern is valid")
});

/// Fraction digits beyond this never change the result (multipliers are at
/// most 10^12) and would overflow the u128 intermediate
const MAX_FRACTION_DIGITS: usize = 18;

/// Keep only digits, commas, periods, whitespace and ASCII letters
///
/// This is the filter an input box applies to keystrokes before the text ever
/// reaches the parser. Parsing does not rely on it.
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| {
            c.is_ascii_digit()
                || c.is_ascii_alphabetic()
                || c.is_whitespace()
                || *c == ','
                || *c == '.'
        })
        .collect()
}

/// Parse a raw input using the default magnitude limit
pub fn parse_quantity(raw: &str) -> Result<u64> {
    parse_quantity_with_limit(raw, MAX_SUPPORTED_VALUE)
}

/// Parse a raw input, rejecting values above `max_value`
pub fn parse_quantity_with_limit(raw: &str, max_value: u64) -> Result<u64> {
    let text = raw.trim().to_lowercase();

    if text.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let value = if text.chars().any(|c| c.is_ascii_alphabetic()) {
        parse_with_unit(&text, max_value)?
    } else {
        parse_numeral(&text, max_value)?
    };

    if value > u128::from(max_value) {
        return Err(ParseFailure::OutOfRange {
            value: value.to_string(),
            max: max_value,
        });
    }

    // Bounded by max_value above
    Ok(value as u64)
}

/// Plain numeral: commas are thousands separators, nothing else is allowed
fn parse_numeral(text: &str, max_value: u64) -> Result<u128> {
    let digits: String = text.chars().filter(|&c| c != GROUP_SEPARATOR).collect();

    if let Some(rest) = digits.strip_prefix('-') {
        if is_digits(rest) {
            return Err(ParseFailure::Negative(text.to_string()));
        }
    }

    if !is_digits(&digits) {
        return Err(ParseFailure::InvalidNumeral(text.to_string()));
    }

    digits.parse::<u128>().map_err(|_| ParseFailure::OutOfRange {
        value: digits.clone(),
        max: max_value,
    })
}

/// Number followed by a unit word
fn parse_with_unit(text: &str, max_value: u64) -> Result<u128> {
    let caps = QUANTITY_PATTERN
        .captures(text)
        .ok_or_else(|| ParseFailure::Malformed(text.to_string()))?;

    let whole = caps.get(1).map_or("", |m| m.as_str());
    let fraction = caps.get(2).map_or("", |m| m.as_str());
    let unit_word = caps.get(3).map_or("", |m| m.as_str());

    let unit = ScaleUnit::from_suffix(unit_word)
        .ok_or_else(|| ParseFailure::UnknownUnit(unit_word.to_string()))?;

    scale_decimal(whole, fraction, unit.multiplier()).ok_or_else(|| ParseFailure::OutOfRange {
        value: text.to_string(),
        max: max_value,
    })
}

/// `floor(whole.fraction * multiplier)` in exact integer arithmetic
///
/// The decimal is never converted to binary floating point, so results can
/// differ from a float multiply: "1.005 thousand" is 1005 here, while
/// `floor(1.005_f64 * 1000.0)` is 1004. Returns `None` on overflow.
fn scale_decimal(whole: &str, fraction: &str, multiplier: u64) -> Option<u128> {
    let multiplier = u128::from(multiplier);
    let whole: u128 = whole.parse().ok()?;
    let scaled_whole = whole.checked_mul(multiplier)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if fraction.is_empty() {
        return Some(scaled_whole);
    }

    let numerator: u128 = fraction.parse().ok()?;
    let denominator = 10u128.pow(fraction.len() as u32);
    scaled_whole.checked_add(numerator * multiplier / denominator)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
