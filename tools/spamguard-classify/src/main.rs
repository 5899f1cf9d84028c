use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use spamguard_core::artifact::DEFAULT_DIR;
use spamguard_core::{ArtifactPaths, Classify, SpamDetector};
use tracing::info;

/// Read one message per line from stdin and print one JSON object per line.
#[derive(Parser)]
#[command(name = "spamguard-classify")]
#[command(version)]
struct Cli {
    /// Directory holding spam_model.json and vectorizer.json
    #[arg(short = 'D', long, env = "SPAMGUARD_MODEL_DIR", default_value = DEFAULT_DIR)]
    model_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassifyOutput {
    pub input: String,
    pub label: Option<String>,
    pub spam_probability: Option<f64>,
    pub ham_probability: Option<f64>,
    pub error: Option<String>,
}

fn classify_line<C: Classify + ?Sized>(classifier: &C, line: &str) -> ClassifyOutput {
    match classifier.classify(line) {
        Ok(p) => ClassifyOutput {
            input: line.to_string(),
            label: Some(p.label.to_string()),
            spam_probability: Some(p.spam_probability),
            ham_probability: Some(p.ham_probability),
            error: None,
        },
        Err(e) => ClassifyOutput {
            input: line.to_string(),
            label: None,
            spam_probability: None,
            ham_probability: None,
            error: Some(e.to_string()),
        },
    }
}

fn run<C: Classify + ?Sized, R: BufRead, W: Write>(
    classifier: &C,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record = classify_line(classifier, line);
        writeln!(output, "{}", serde_json::to_string(&record)?)?;
        count += 1;
    }
    output.flush()?;
    Ok(count)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let detector = SpamDetector::load(&ArtifactPaths::in_dir(&cli.model_dir))
        .with_context(|| format!("failed to load artifacts from {}", cli.model_dir.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let count = run(&detector, stdin.lock(), stdout.lock())?;
    info!(count, "classified messages");
    Ok(())
}
