pub mod naive_bayes;

pub use naive_bayes::{MultinomialNb, DEFAULT_ALPHA};
