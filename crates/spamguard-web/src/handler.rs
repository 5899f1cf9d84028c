//! Per-submission logic, independent of the HTTP layer.

use serde::Serialize;
use spamguard_core::{Classify, SpamGuardError};
use tracing::{debug, warn};

/// Shown when the form is submitted without any text.
pub const EMPTY_WARNING: &str = "⚠️ Mohon masukkan pesan terlebih dahulu untuk dideteksi!";

/// What the page renders after a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// Classified as spam; `probability` is P(spam).
    Spam { probability: f64 },
    /// Classified as ham; `probability` is P(ham).
    Ham { probability: f64 },
    /// Input rejected before classification.
    Warning { message: String },
    /// Classification failed unexpectedly.
    Error { message: String },
}

impl Outcome {
    /// Probability formatted the way the page shows it, e.g. `94.72%`.
    pub fn percentage(&self) -> Option<String> {
        match self {
            Self::Spam { probability } | Self::Ham { probability } => {
                Some(format!("{:.2}%", probability * 100.0))
            }
            Self::Warning { .. } | Self::Error { .. } => None,
        }
    }
}

/// Validates and classifies one submission.
///
/// Blank input is answered with a warning without touching `classifier`.
pub fn handle_submission<C: Classify + ?Sized>(classifier: &C, message: &str) -> Outcome {
    if message.trim().is_empty() {
        debug!("rejected empty submission");
        return Outcome::Warning {
            message: EMPTY_WARNING.to_string(),
        };
    }

    match classifier.classify(message) {
        Ok(prediction) if prediction.is_spam() => Outcome::Spam {
            probability: prediction.spam_probability,
        },
        Ok(prediction) => Outcome::Ham {
            probability: prediction.ham_probability,
        },
        Err(SpamGuardError::EmptyInput) => Outcome::Warning {
            message: EMPTY_WARNING.to_string(),
        },
        Err(e) => {
            warn!(error = %e, "classification failed");
            Outcome::Error {
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use spamguard_core::{Prediction, Result};

    use super::*;

    /// Returns a fixed prediction and counts how often it was asked.
    pub(crate) struct StubClassifier {
        pub proba: [f64; 2],
        pub calls: AtomicUsize,
    }

    impl StubClassifier {
        pub(crate) fn new(ham: f64, spam: f64) -> Self {
            Self {
                proba: [ham, spam],
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Classify for StubClassifier {
        fn classify(&self, _text: &str) -> Result<Prediction> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Prediction::from_proba(self.proba))
        }
    }

    struct FailingClassifier;

    impl Classify for FailingClassifier {
        fn classify(&self, _text: &str) -> Result<Prediction> {
            Err(SpamGuardError::DimensionMismatch {
                expected: 3,
                actual: 1,
            })
        }
    }

    #[test]
    fn blank_input_never_reaches_classifier() {
        let stub = StubClassifier::new(0.1, 0.9);
        for input in ["", " ", "\n\t  \r\n"] {
            let outcome = handle_submission(&stub, input);
            assert_eq!(
                outcome,
                Outcome::Warning {
                    message: EMPTY_WARNING.to_string()
                }
            );
        }
        assert_eq!(stub.calls(), 0);
    }

    #[test]
    fn spam_reports_spam_probability() {
        let stub = StubClassifier::new(0.0528, 0.9472);
        let outcome = handle_submission(&stub, "klik link hadiah");
        assert_eq!(outcome, Outcome::Spam { probability: 0.9472 });
        assert_eq!(outcome.percentage().as_deref(), Some("94.72%"));
        assert_eq!(stub.calls(), 1);
    }

    #[test]
    fn ham_reports_ham_probability() {
        let stub = StubClassifier::new(0.8, 0.2);
        let outcome = handle_submission(&stub, "rapat besok");
        assert_eq!(outcome, Outcome::Ham { probability: 0.8 });
        assert_eq!(outcome.percentage().as_deref(), Some("80.00%"));
    }

    #[test]
    fn classifier_errors_become_error_outcome() {
        let outcome = handle_submission(&FailingClassifier, "apa saja");
        assert!(matches!(outcome, Outcome::Error { .. }));
        assert_eq!(outcome.percentage(), None);
    }
}
