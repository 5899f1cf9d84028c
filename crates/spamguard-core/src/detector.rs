//! # Spam detector
//!
//! Bundles the normalizer, vectorizer and classifier into a single
//! read-only inference object.

use tracing::debug;

use crate::artifact::{self, ArtifactPaths};
use crate::classifier::{MultinomialNb, DEFAULT_ALPHA};
use crate::dataset::{self, Sample};
use crate::error::{Result, SpamGuardError};
use crate::text::Normalizer;
use crate::types::Prediction;
use crate::vectorizer::CountVectorizer;

/// Anything that can turn raw message text into a [`Prediction`].
pub trait Classify: Send + Sync {
    /// Classify a raw, unnormalized message.
    ///
    /// # Errors
    ///
    /// Returns `SpamGuardError::EmptyInput` for empty or whitespace-only text.
    fn classify(&self, text: &str) -> Result<Prediction>;
}

/// Training configuration for [`SpamDetector::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Additive smoothing for the Naive-Bayes estimator.
    pub alpha: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smoothing parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// A fitted normalizer + vectorizer + classifier pipeline.
#[derive(Debug, Clone)]
pub struct SpamDetector {
    normalizer: Normalizer,
    vectorizer: CountVectorizer,
    model: MultinomialNb,
}

impl SpamDetector {
    /// Normalizes `samples`, learns the vocabulary and fits the classifier.
    ///
    /// # Examples
    /// ```
    /// use spamguard_core::{dataset, DetectorConfig, Label, SpamDetector};
    ///
    /// let detector = SpamDetector::fit(&dataset::builtin(), &DetectorConfig::default()).unwrap();
    /// let prediction = detector.predict("Klaim hadiah sekarang, klik link ini!").unwrap();
    /// assert_eq!(prediction.label, Label::Spam);
    /// ```
    pub fn fit(samples: &[Sample], config: &DetectorConfig) -> Result<Self> {
        let normalizer = Normalizer::new()?;
        let (texts, labels) = dataset::unzip(samples);
        let normalized = normalizer.normalize_all(&texts);

        let mut vectorizer = CountVectorizer::new();
        let x = vectorizer.fit_transform(&normalized);

        let mut model = MultinomialNb::new().with_alpha(config.alpha);
        model.fit(&x, &labels)?;

        Ok(Self {
            normalizer,
            vectorizer,
            model,
        })
    }

    /// Assembles a detector from separately trained parts.
    ///
    /// # Errors
    ///
    /// `NotFitted` if either part is untrained, `ArtifactMismatch` if the
    /// model width differs from the vocabulary size.
    pub fn from_parts(vectorizer: CountVectorizer, model: MultinomialNb) -> Result<Self> {
        if !model.is_fitted() {
            return Err(SpamGuardError::NotFitted("MultinomialNb"));
        }
        if model.n_features() != vectorizer.vocabulary_len() {
            return Err(SpamGuardError::ArtifactMismatch {
                model_features: model.n_features(),
                vocabulary: vectorizer.vocabulary_len(),
            });
        }
        Ok(Self {
            normalizer: Normalizer::new()?,
            vectorizer,
            model,
        })
    }

    /// Loads both artifacts and checks that they belong together.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let model: MultinomialNb = artifact::load(&paths.model)?;
        if !model.is_consistent() {
            return Err(SpamGuardError::ArtifactCorrupt {
                path: paths.model.clone(),
                reason: "model parameters are malformed".into(),
            });
        }

        let vectorizer: CountVectorizer = artifact::load(&paths.vectorizer)?;
        if !vectorizer.is_consistent() {
            return Err(SpamGuardError::ArtifactCorrupt {
                path: paths.vectorizer.clone(),
                reason: "vocabulary indices are malformed".into(),
            });
        }

        Self::from_parts(vectorizer, model)
    }

    /// Writes both artifacts.
    pub fn save(&self, paths: &ArtifactPaths) -> Result<()> {
        artifact::save(&self.model, &paths.model)?;
        artifact::save(&self.vectorizer, &paths.vectorizer)
    }

    /// Classifies one raw message.
    ///
    /// An input that normalizes to nothing (e.g. only digits) still yields a
    /// prediction driven by the class priors.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        if text.trim().is_empty() {
            return Err(SpamGuardError::EmptyInput);
        }

        let normalized = self.normalizer.normalize(text);
        let x = self.vectorizer.transform(&normalized);
        let prediction = Prediction::from_proba(self.model.predict_proba(&x)?);
        debug!(%normalized, %prediction, "classified message");
        Ok(prediction)
    }

    /// Accuracy over labelled `samples`.
    pub fn evaluate(&self, samples: &[Sample]) -> Result<f64> {
        let (texts, labels) = dataset::unzip(samples);
        let normalized = self.normalizer.normalize_all(&texts);
        let x = self.vectorizer.transform_batch(&normalized);
        self.model.score(&x, &labels)
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> &MultinomialNb {
        &self.model
    }
}

impl Classify for SpamDetector {
    fn classify(&self, text: &str) -> Result<Prediction> {
        self.predict(text)
    }
}
