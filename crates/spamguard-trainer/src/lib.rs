//! # SpamGuard Trainer
//!
//! Offline workflow that fits the bag-of-words vectorizer and the
//! Naive-Bayes classifier, evaluates them on a held-out split and writes
//! the artifacts the front-ends load.

pub mod split;
pub mod trainer;

pub use split::train_test_split;
pub use trainer::{run_training, Trainer, TrainingConfig, TrainingReport};
