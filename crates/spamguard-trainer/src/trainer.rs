//! Training run: load data, split, fit, evaluate, persist.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use spamguard_core::artifact::{self, ArtifactPaths, DEFAULT_DIR};
use spamguard_core::{dataset, DetectorConfig, Sample, SpamDetector};
use tracing::{info, warn};

use crate::split::train_test_split;

/// File name of the JSON summary written next to the artifacts.
pub const REPORT_FILE: &str = "training_report.json";

/// Parameters of one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Optional `label<TAB>text` dataset; the built-in corpus otherwise.
    pub dataset: Option<PathBuf>,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// Fraction of samples held out for evaluation.
    pub test_ratio: f64,
    /// Seed of the shuffle preceding the split.
    pub seed: u64,
    /// Naive-Bayes smoothing.
    pub alpha: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            output_dir: PathBuf::from(DEFAULT_DIR),
            test_ratio: 0.2,
            seed: 42,
            alpha: spamguard_core::classifier::DEFAULT_ALPHA,
        }
    }
}

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub samples: usize,
    pub train_size: usize,
    pub test_size: usize,
    pub vocabulary: usize,
    /// Held-out accuracy; `None` when the test split is empty.
    pub accuracy: Option<f64>,
}

pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Loads the configured dataset.
    pub fn load_samples(&self) -> Result<Vec<Sample>> {
        match &self.config.dataset {
            Some(path) => dataset::load_tsv(path)
                .with_context(|| format!("failed to load dataset {}", path.display())),
            None => Ok(dataset::builtin()),
        }
    }

    /// Splits `samples`, fits a detector on the training part and scores it
    /// on the held-out part.
    pub fn train(&self, samples: &[Sample]) -> Result<(SpamDetector, TrainingReport)> {
        let (train, test) = train_test_split(samples, self.config.test_ratio, self.config.seed)?;
        info!(
            train = train.len(),
            test = test.len(),
            seed = self.config.seed,
            "split dataset"
        );

        let detector_config = DetectorConfig::new().with_alpha(self.config.alpha);
        let detector =
            SpamDetector::fit(&train, &detector_config).context("failed to fit detector")?;

        let accuracy = if test.is_empty() {
            warn!("test split is empty, skipping evaluation");
            None
        } else {
            let accuracy = detector.evaluate(&test)?;
            info!("held-out accuracy: {accuracy:.2}");
            Some(accuracy)
        };

        let report = TrainingReport {
            samples: samples.len(),
            train_size: train.len(),
            test_size: test.len(),
            vocabulary: detector.vectorizer().vocabulary_len(),
            accuracy,
        };
        Ok((detector, report))
    }

    /// Writes both artifacts and the report into the output directory.
    pub fn save(
        &self,
        detector: &SpamDetector,
        report: &TrainingReport,
    ) -> Result<ArtifactPaths> {
        let dir = &self.config.output_dir;
        let paths = ArtifactPaths::in_dir(dir);
        detector
            .save(&paths)
            .with_context(|| format!("failed to save artifacts to {}", dir.display()))?;
        artifact::save(report, &report_path(dir))?;
        Ok(paths)
    }

    /// Full pipeline: load, train, evaluate, save.
    pub fn run(&self) -> Result<(TrainingReport, ArtifactPaths)> {
        let samples = self.load_samples()?;
        info!(samples = samples.len(), "starting training");

        let (detector, report) = self.train(&samples)?;
        let paths = self.save(&detector, &report)?;
        Ok((report, paths))
    }
}

/// Location of the report inside `dir`.
pub fn report_path(dir: &Path) -> PathBuf {
    dir.join(REPORT_FILE)
}

/// Run training with the given configuration.
pub fn run_training(config: TrainingConfig) -> Result<(TrainingReport, ArtifactPaths)> {
    Trainer::new(config).run()
}
