use regex::Regex;

use crate::error::Result;

/// Canonicalizes raw message text before vectorization.
///
/// The same normalizer must be used at training and at inference time,
/// otherwise the vocabulary will not line up with user input.
///
/// Steps, in order:
/// 1. lowercase
/// 2. drop URL-like runs (`http…`, `https…`, `www…` up to whitespace)
/// 3. drop ASCII and Unicode punctuation
/// 4. drop decimal digits
/// 5. drop URL-like runs again (steps 3 and 4 can splice new ones together)
/// 6. collapse whitespace runs to one space and trim
#[derive(Debug, Clone)]
pub struct Normalizer {
    re_url: Regex,
    re_punct: Regex,
    re_digits: Regex,
    re_space: Regex,
}

impl Normalizer {
    /// Constructs a normalizer with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `SpamGuardError::Regex` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_url: Regex::new(r"http\S+|www\S+|https\S+")?,
            re_punct: Regex::new(r"[[:punct:]\p{P}]+")?,
            re_digits: Regex::new(r"\d+")?,
            re_space: Regex::new(r"\s+")?,
        })
    }

    /// Normalizes `text`. Total over all inputs; `""` maps to `""`.
    ///
    /// # Examples
    /// ```
    /// use spamguard_core::text::Normalizer;
    ///
    /// let normalizer = Normalizer::new().unwrap();
    /// assert_eq!(
    ///     normalizer.normalize("Klik https://bit.ly/x SEKARANG!!  Hadiah 100 ribu"),
    ///     "klik sekarang hadiah ribu"
    /// );
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let text = self.re_url.replace_all(&lowered, "");
        let text = self.re_punct.replace_all(&text, "");
        let text = self.re_digits.replace_all(&text, "");
        let text = self.re_url.replace_all(&text, "");
        self.re_space.replace_all(&text, " ").trim().to_string()
    }

    /// Normalizes every document in `texts`.
    pub fn normalize_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}
