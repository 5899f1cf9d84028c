//! # SpamGuard Core
//!
//! Text normalization, bag-of-words vectorization and multinomial
//! Naive-Bayes classification for short spam/ham messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use spamguard_core::{dataset, DetectorConfig, Label, SpamDetector};
//!
//! let detector = SpamDetector::fit(&dataset::builtin(), &DetectorConfig::default()).unwrap();
//! let prediction = detector.predict("Selamat! Anda dapat hadiah, klik link sekarang").unwrap();
//!
//! assert_eq!(prediction.label, Label::Spam);
//! assert!(prediction.spam_probability > 0.5);
//! ```
pub mod artifact;
pub mod classifier;
pub mod dataset;
pub mod detector;
pub mod error;
pub mod text;
pub mod types;
pub mod vectorizer;

// Re-export primary API
pub use artifact::ArtifactPaths;
pub use classifier::MultinomialNb;
pub use dataset::Sample;
pub use detector::{Classify, DetectorConfig, SpamDetector};
pub use error::{Result, SpamGuardError};
pub use text::Normalizer;
pub use types::{Label, Prediction};
pub use vectorizer::CountVectorizer;
