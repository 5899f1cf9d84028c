use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two classes a message can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate, non-spam message.
    Ham,
    /// Unsolicited or fraudulent message.
    Spam,
}

impl Label {
    /// Number of classes known to the classifier.
    pub const COUNT: usize = 2;

    /// All labels ordered by class index.
    pub const ALL: [Label; Self::COUNT] = [Label::Ham, Label::Spam];

    /// Class index used in feature matrices and probability arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Ham => 0,
            Self::Spam => 1,
        }
    }

    /// Inverse of [`Label::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn is_spam(self) -> bool {
        self == Self::Spam
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ham => write!(f, "ham"),
            Self::Spam => write!(f, "spam"),
        }
    }
}

/// Error returned when a string is not a recognised label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError(pub String);

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label {:?} (expected ham/spam or 0/1)", self.0)
    }
}

impl std::error::Error for ParseLabelError {}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ham" | "0" => Ok(Self::Ham),
            "spam" | "1" => Ok(Self::Spam),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for label in Label::ALL {
            assert_eq!(Label::from_index(label.index()), Some(label));
        }
        assert_eq!(Label::from_index(2), None);
    }

    #[test]
    fn parse_accepts_names_and_indices() {
        assert_eq!("spam".parse::<Label>().unwrap(), Label::Spam);
        assert_eq!(" HAM ".parse::<Label>().unwrap(), Label::Ham);
        assert_eq!("1".parse::<Label>().unwrap(), Label::Spam);
        assert_eq!("0".parse::<Label>().unwrap(), Label::Ham);
        assert!("phishing".parse::<Label>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Label::Spam).unwrap(), "\"spam\"");
        let back: Label = serde_json::from_str("\"ham\"").unwrap();
        assert_eq!(back, Label::Ham);
    }
}
