//! End-to-end conversion tests
//!
//! These exercise the public API the way the HTTP layer uses it.

use numconv_text_processing::{
    convert, group_digits, number_to_words, parse_quantity, to_indian_words, ConversionPipeline,
    Converter, ParseFailure,
};

/// Values spread across every scale band
const SAMPLES: [u64; 14] = [
    0,
    7,
    99,
    105,
    1_000,
    99_999,
    100_000,
    1_500_000,
    12_345_678,
    40_000_000,
    1_000_000_007,
    2_500_000_000_000,
    123_456_789_012_345,
    999_999_999_999_999,
];

#[test]
fn test_documented_phrases() {
    assert_eq!(parse_quantity("15 lakhs"), Ok(1_500_000));
    assert_eq!(parse_quantity("40 million"), Ok(40_000_000));
    assert_eq!(parse_quantity("2.5 million"), Ok(2_500_000));
    assert_eq!(parse_quantity("1,000,000"), Ok(1_000_000));
}

#[test]
fn test_documented_words() {
    assert_eq!(number_to_words(0), "zero");
    assert_eq!(number_to_words(105), "one hundred five");
    assert_eq!(number_to_words(1000), "one thousand");
    assert_eq!(to_indian_words(1_500_000), "fifteen lakh");
    assert_eq!(
        to_indian_words(12_345_678),
        "one crore twenty three lakh forty five thousand six hundred seventy eight"
    );
}

#[test]
fn test_documented_failures() {
    assert!(parse_quantity("abc").is_err());
    assert_eq!(parse_quantity(""), Err(ParseFailure::Empty));
    assert!(matches!(parse_quantity("5 zorp"), Err(ParseFailure::UnknownUnit(_))));
}

#[test]
fn test_grouped_digits_parse_back() {
    for n in SAMPLES {
        assert_eq!(parse_quantity(&group_digits(n)), Ok(n), "round trip of {}", n);
    }
}

#[test]
fn test_words_never_empty() {
    for n in SAMPLES.iter().copied().filter(|&n| n > 0) {
        let words = number_to_words(n);
        assert!(!words.is_empty());
        assert_ne!(words, "zero");
        assert!(!to_indian_words(n).is_empty());
    }
}

#[test]
fn test_lakh_summary_boundary() {
    assert_eq!(convert("99999").unwrap().lakhs, "< 1 lakh");
    assert_eq!(convert("100000").unwrap().lakhs, "1.00 lakhs");
    assert_eq!(convert("1 lakh").unwrap().lakhs, "1.00 lakhs");
}

#[test]
fn test_full_record_for_crore_input() {
    let result = convert("1.2345678 crore").unwrap();
    assert_eq!(result.value, 12_345_678);
    assert_eq!(result.original, "12,345,678");
    assert_eq!(
        result.words,
        "twelve million three hundred forty five thousand six hundred seventy eight"
    );
    assert_eq!(
        result.indian,
        "one crore twenty three lakh forty five thousand six hundred seventy eight"
    );
    assert_eq!(result.lakhs, "123.46 lakhs");
    assert_eq!(result.crores, "1.23 crores");
    assert_eq!(result.millions, "12.35 million");
    assert_eq!(result.billions, "< 1 billion");
}

#[test]
fn test_trait_object_usage() {
    let converter: Box<dyn Converter> = Box::new(ConversionPipeline::default());
    let result = converter.convert("40k").unwrap();
    assert_eq!(result.original, "40,000");
    assert_eq!(result.words, "forty thousand");
}
