use std::path::PathBuf;

use clap::Parser;
use spamguard_core::artifact::DEFAULT_DIR;
use spamguard_trainer::{run_training, TrainingConfig};

/// Train the spam classifier and write its artifacts.
#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Fit the SpamGuard vectorizer and Naive-Bayes model")]
#[command(version)]
struct Cli {
    /// `label<TAB>text` dataset; the built-in 20-message corpus if omitted
    #[arg(short, long, env = "SPAMGUARD_DATASET")]
    dataset: Option<PathBuf>,

    /// Directory for spam_model.json and vectorizer.json
    #[arg(short, long, env = "SPAMGUARD_MODEL_DIR", default_value = DEFAULT_DIR)]
    output_dir: PathBuf,

    /// Fraction of samples held out for evaluation
    #[arg(short, long, env = "SPAMGUARD_TEST_RATIO", default_value_t = 0.2)]
    test_ratio: f64,

    /// Shuffle seed for the train/test split
    #[arg(short, long, env = "SPAMGUARD_SEED", default_value_t = 42)]
    seed: u64,

    /// Additive smoothing
    #[arg(short, long, env = "SPAMGUARD_ALPHA", default_value_t = 1.0)]
    alpha: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = TrainingConfig {
        dataset: cli.dataset,
        output_dir: cli.output_dir,
        test_ratio: cli.test_ratio,
        seed: cli.seed,
        alpha: cli.alpha,
    };

    match run_training(config) {
        Ok((report, paths)) => {
            match report.accuracy {
                Some(accuracy) => println!("Model accuracy on test data: {accuracy:.2}"),
                None => println!("No test data held out; accuracy not measured"),
            }
            println!(
                "\nModel '{}' and vectorizer '{}' saved.",
                paths.model.display(),
                paths.vectorizer.display()
            );
            println!("Start the web front-end with `spamguard-web` to try it out.");
        }
        Err(e) => {
            eprintln!("Training failed: {e:#}");
            std::process::exit(1);
        }
    }
}
