//! # Text preprocessing
//!
//! Normalization and tokenization shared by training and inference.

pub mod normalizer;

pub use normalizer::Normalizer;

/// Splits normalized text into bag-of-words tokens.
///
/// Tokens are maximal runs of non-whitespace characters.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        let tokens: Vec<_> = tokenize(" rapat\tjam  sore\n").collect();
        assert_eq!(tokens, vec!["rapat", "jam", "sore"]);
    }

    #[test]
    fn tokenize_empty() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   ").count(), 0);
    }
}
