//! Western short-scale number words
//!
//! Lower-case, space separated, no "and" and no hyphens:
//! `1_234_567` -> "one million two hundred thirty four thousand five hundred sixty seven".

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale word per 3-digit group index. Covers the whole `u64` range; parsed
/// input never goes past "trillion".
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Convert a non-negative integer to English words
///
/// # Examples
/// ```
/// use numconv_text_processing::number_to_words;
/// assert_eq!(number_to_words(0), "zero");
/// assert_eq!(number_to_words(105), "one hundred five");
/// assert_eq!(number_to_words(1000), "one thousand");
/// ```
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = n;
    let mut scale_index = 0;

    while remaining > 0 {
        let group = (remaining % 1000) as usize;
        if group != 0 {
            let words = group_to_words(group);
            match SCALES.get(scale_index) {
                Some(scale) if !scale.is_empty() => groups.push(format!("{} {}", words, scale)),
                _ => groups.push(words),
            }
        }
        remaining /= 1000;
        scale_index += 1;
    }

    groups.reverse();
    groups.join(" ")
}

/// Words for a group in `1..=999`
fn group_to_words(group: usize) -> String {
    let mut parts = Vec::with_capacity(4);
    let mut n = group;

    if n >= 100 {
        parts.push(ONES[n / 100]);
        parts.push("hundred");
        n %= 100;
    }

    if n >= 20 {
        parts.push(TENS[n / 10]);
        n %= 10;
        if n > 0 {
            parts.push(ONES[n]);
        }
    } else if n >= 10 {
        parts.push(TEENS[n - 10]);
    } else if n > 0 {
        parts.push(ONES[n]);
    }

    parts.join(" ")
}
