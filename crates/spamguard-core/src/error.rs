use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during SpamGuard core operations.
#[derive(Debug, Error)]
pub enum SpamGuardError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A persisted artifact does not exist at the expected path.
    #[error("artifact not found: {}", path.display())]
    ArtifactMissing {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// A persisted artifact exists but could not be decoded.
    #[error("artifact {} is corrupt: {reason}", path.display())]
    ArtifactCorrupt {
        /// The offending file.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// The model and vectorizer were not trained together.
    #[error("model expects {model_features} features but vectorizer has {vocabulary} tokens")]
    ArtifactMismatch {
        model_features: usize,
        vocabulary: usize,
    },

    /// The component was used before `fit` was called.
    #[error("{0} has not been fitted")]
    NotFitted(&'static str),

    /// A feature vector does not have the width the model was trained on.
    #[error("expected feature vector of length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Training data cannot produce a valid model.
    #[error("invalid training data: {0}")]
    InvalidTrainingData(String),

    /// A hyperparameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A dataset file line could not be parsed.
    #[error("dataset line {line}: {reason}")]
    Dataset { line: usize, reason: String },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while writing an artifact.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SpamGuard operations.
pub type Result<T> = std::result::Result<T, SpamGuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SpamGuardError::EmptyInput;
        assert_eq!(err.to_string(), "input is empty or whitespace-only");

        let err = SpamGuardError::ArtifactMissing {
            path: PathBuf::from("models/spam_model.json"),
        };
        assert!(err.to_string().contains("models/spam_model.json"));

        let err = SpamGuardError::DimensionMismatch {
            expected: 121,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "expected feature vector of length 121, got 3"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpamGuardError>();
    }
}
