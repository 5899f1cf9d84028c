use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SpamGuardError};
use crate::types::{Label, Prediction};

/// Default additive (Laplace) smoothing.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Multinomial Naive Bayes over token count vectors.
///
/// `log P(token_j | c) = ln((N_cj + alpha) / (N_c + alpha * n_features))`
/// and the class prior is the empirical document frequency of `c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha: f64,
    n_features: usize,
    /// Training documents per class, indexed by [`Label::index`].
    class_count: [u64; Label::COUNT],
    class_log_prior: [f64; Label::COUNT],
    /// `feature_log_prob[class][feature]`
    feature_log_prob: [Vec<f64>; Label::COUNT],
    fitted: bool,
}

impl Default for MultinomialNb {
    fn default() -> Self {
        Self::new()
    }
}

impl MultinomialNb {
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            n_features: 0,
            class_count: [0; Label::COUNT],
            class_log_prior: [0.0; Label::COUNT],
            feature_log_prob: Default::default(),
            fitted: false,
        }
    }

    /// Set the smoothing parameter. Validated on [`MultinomialNb::fit`].
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Estimates class priors and per-class token probabilities.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `alpha` is not a finite positive number.
    /// - `InvalidTrainingData` if `x` is empty, `x` and `y` differ in length,
    ///   rows have different widths, or either class has no samples.
    pub fn fit(&mut self, x: &[Vec<u32>], y: &[Label]) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(SpamGuardError::InvalidParameter(format!(
                "alpha must be a positive finite number, got {}",
                self.alpha
            )));
        }
        if x.is_empty() {
            return Err(SpamGuardError::InvalidTrainingData(
                "no training samples".into(),
            ));
        }
        if x.len() != y.len() {
            return Err(SpamGuardError::InvalidTrainingData(format!(
                "{} feature rows but {} labels",
                x.len(),
                y.len()
            )));
        }

        let n_features = x[0].len();
        if let Some(row) = x.iter().position(|row| row.len() != n_features) {
            return Err(SpamGuardError::InvalidTrainingData(format!(
                "row {row} has {} features, expected {n_features}",
                x[row].len()
            )));
        }

        let mut class_count = [0u64; Label::COUNT];
        let mut feature_count = [vec![0u64; n_features], vec![0u64; n_features]];
        for (row, label) in x.iter().zip(y) {
            let c = label.index();
            class_count[c] += 1;
            for (total, &count) in feature_count[c].iter_mut().zip(row) {
                *total += u64::from(count);
            }
        }

        if let Some(missing) = Label::ALL.iter().find(|l| class_count[l.index()] == 0) {
            return Err(SpamGuardError::InvalidTrainingData(format!(
                "no samples labelled {missing}"
            )));
        }

        let n_docs = x.len() as f64;
        let mut class_log_prior = [0.0; Label::COUNT];
        let mut feature_log_prob: [Vec<f64>; Label::COUNT] = Default::default();
        for label in Label::ALL {
            let c = label.index();
            class_log_prior[c] = (class_count[c] as f64 / n_docs).ln();

            let total: u64 = feature_count[c].iter().sum();
            let denom = (total as f64 + self.alpha * n_features as f64).ln();
            feature_log_prob[c] = feature_count[c]
                .iter()
                .map(|&count| (count as f64 + self.alpha).ln() - denom)
                .collect();
        }

        self.n_features = n_features;
        self.class_count = class_count;
        self.class_log_prior = class_log_prior;
        self.feature_log_prob = feature_log_prob;
        self.fitted = true;

        debug!(
            samples = x.len(),
            features = n_features,
            ham = class_count[Label::Ham.index()],
            spam = class_count[Label::Spam.index()],
            "fitted multinomial naive bayes"
        );
        Ok(())
    }

    /// Unnormalized joint log likelihood `ln P(c) + sum_j x_j ln P(j|c)`.
    pub fn predict_log_joint(&self, x: &[u32]) -> Result<[f64; Label::COUNT]> {
        self.check_input(x)?;

        let mut jll = self.class_log_prior;
        for (c, score) in jll.iter_mut().enumerate() {
            *score += x
                .iter()
                .zip(&self.feature_log_prob[c])
                .filter(|(count, _)| **count > 0)
                .map(|(&count, &log_prob)| f64::from(count) * log_prob)
                .sum::<f64>();
        }
        Ok(jll)
    }

    /// Class posteriors indexed by [`Label::index`]; they sum to 1.
    pub fn predict_proba(&self, x: &[u32]) -> Result<[f64; Label::COUNT]> {
        let jll = self.predict_log_joint(x)?;

        // log-sum-exp shifted by the max for numerical stability
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp = jll.map(|s| (s - max).exp());
        let sum: f64 = exp.iter().sum();
        Ok(exp.map(|e| e / sum))
    }

    /// The class with the higher posterior. Ties go to [`Label::Ham`].
    pub fn predict(&self, x: &[u32]) -> Result<Label> {
        Ok(Prediction::from_proba(self.predict_proba(x)?).label)
    }

    /// Fraction of rows in `x` whose prediction matches `y`.
    pub fn score(&self, x: &[Vec<u32>], y: &[Label]) -> Result<f64> {
        if x.is_empty() || x.len() != y.len() {
            return Err(SpamGuardError::InvalidTrainingData(format!(
                "cannot score {} rows against {} labels",
                x.len(),
                y.len()
            )));
        }

        let mut correct = 0usize;
        for (row, &label) in x.iter().zip(y) {
            if self.predict(row)? == label {
                correct += 1;
            }
        }
        Ok(correct as f64 / x.len() as f64)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Width of the feature vectors this model was trained on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Training documents seen for `label`.
    pub fn class_count(&self, label: Label) -> u64 {
        self.class_count[label.index()]
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Structural sanity check for models read from disk.
    pub(crate) fn is_consistent(&self) -> bool {
        self.fitted
            && self.alpha.is_finite()
            && self.alpha > 0.0
            && self.class_log_prior.iter().all(|p| p.is_finite())
            && self
                .feature_log_prob
                .iter()
                .all(|row| row.len() == self.n_features && row.iter().all(|p| p.is_finite()))
    }

    fn check_input(&self, x: &[u32]) -> Result<()> {
        if !self.fitted {
            return Err(SpamGuardError::NotFitted("MultinomialNb"));
        }
        if x.len() != self.n_features {
            return Err(SpamGuardError::DimensionMismatch {
                expected: self.n_features,
                actual: x.len(),
            });
        }
        Ok(())
    }
}
