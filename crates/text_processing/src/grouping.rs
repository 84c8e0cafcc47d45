//! Thousands digit grouping
//!
//! Always groups by three from the right with a comma, regardless of which
//! numbering system the words are shown in. The parser strips exactly this
//! separator, so every grouped form parses back to its value.

/// Thousands separator; the numeral parser removes only this character
pub const GROUP_SEPARATOR: char = ',';

/// Group digits with a comma: `1000000` -> `"1,000,000"`
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result
}
