//! Indian numbering-system words (crore / lakh / thousand)
//!
//! Each segment count is spelled with the Western converter, so
//! `12_345_678` becomes "one crore twenty three lakh forty five thousand six
//! hundred seventy eight".

use crate::words::number_to_words;

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Segments, consumed in this order
const SEGMENTS: [(u64, &str); 3] = [(CRORE, "crore"), (LAKH, "lakh"), (THOUSAND, "thousand")];

/// Convert a non-negative integer to Indian-format words
///
/// Values below one lakh are identical to [`number_to_words`]. Crore counts
/// above 999 are spelled in Western words ("ten thousand crore").
pub fn to_indian_words(n: u64) -> String {
    if n < LAKH {
        return number_to_words(n);
    }

    let mut parts = Vec::with_capacity(4);
    let mut remaining = n;

    for (divisor, label) in SEGMENTS {
        let count = remaining / divisor;
        if count > 0 {
            parts.push(format!("{} {}", number_to_words(count), label));
        }
        remaining %= divisor;
    }

    if remaining > 0 {
        parts.push(number_to_words(remaining));
    }

    parts.join(" ")
}
