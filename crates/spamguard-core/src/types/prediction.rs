use serde::{Deserialize, Serialize};

use super::label::Label;

/// The outcome of classifying a single message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The class with the higher posterior probability.
    pub label: Label,

    /// Posterior probability of [`Label::Spam`] in `[0.0, 1.0]`.
    pub spam_probability: f64,

    /// Posterior probability of [`Label::Ham`] in `[0.0, 1.0]`.
    pub ham_probability: f64,
}

impl Prediction {
    /// Builds a prediction from class posteriors indexed by [`Label::index`].
    ///
    /// Ties resolve to [`Label::Ham`].
    #[must_use]
    pub fn from_proba(proba: [f64; Label::COUNT]) -> Self {
        let label = if proba[Label::Spam.index()] > proba[Label::Ham.index()] {
            Label::Spam
        } else {
            Label::Ham
        };
        Self {
            label,
            spam_probability: proba[Label::Spam.index()],
            ham_probability: proba[Label::Ham.index()],
        }
    }

    /// Probability of the predicted label.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        match self.label {
            Label::Spam => self.spam_probability,
            Label::Ham => self.ham_probability,
        }
    }

    #[must_use]
    pub fn is_spam(&self) -> bool {
        self.label.is_spam()
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Prediction(label={}, p={:.2}%)",
            self.label,
            self.confidence() * 100.0
        )
    }
}
