//! Conversion result record

use serde::{Deserialize, Serialize};

/// Every representation produced for one parsed quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// The parsed quantity
    pub value: u64,
    /// Thousands-grouped digits ("1,500,000")
    pub original: String,
    /// Western short-scale words ("one million five hundred thousand")
    pub words: String,
    /// Indian numbering-system words ("fifteen lakh")
    pub indian: String,
    /// Ratio to one lakh ("15.00 lakhs" or "< 1 lakh")
    pub lakhs: String,
    /// Ratio to one crore
    pub crores: String,
    /// Ratio to one million
    pub millions: String,
    /// Ratio to one billion
    pub billions: String,
}

impl ConversionResult {
    /// Copy with the first letter of every word of `words` and `indian`
    /// upper-cased, for display
    pub fn capitalized(&self) -> Self {
        Self {
            words: capitalize_words(&self.words),
            indian: capitalize_words(&self.indian),
            ..self.clone()
        }
    }
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
