use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spamguard_core::artifact::{ArtifactPaths, DEFAULT_DIR, MODEL_FILE, VECTORIZER_FILE};
use spamguard_web::{router, AppState};
use tracing::{error, info};

/// CLI arguments
#[derive(Parser)]
#[command(name = "spamguard-web")]
#[command(about = "Serve the SpamGuard spam detector as a web form")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(short = 'H', long, env = "SPAMGUARD_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "SPAMGUARD_PORT", default_value_t = 8501)]
    port: u16,

    /// Directory holding the trained artifacts
    #[arg(short = 'D', long, env = "SPAMGUARD_MODEL_DIR", default_value = DEFAULT_DIR)]
    model_dir: PathBuf,

    /// Override path of the serialized model
    #[arg(short, long, env = "SPAMGUARD_MODEL")]
    model: Option<PathBuf>,

    /// Override path of the serialized vectorizer
    #[arg(short, long, env = "SPAMGUARD_VECTORIZER")]
    vectorizer: Option<PathBuf>,
}

impl Cli {
    fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(
            self.model
                .clone()
                .unwrap_or_else(|| self.model_dir.join(MODEL_FILE)),
            self.vectorizer
                .clone()
                .unwrap_or_else(|| self.model_dir.join(VECTORIZER_FILE)),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let paths = cli.artifact_paths();

    // Nothing is served unless both artifacts load.
    let state = match AppState::load(&paths) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to load artifacts");
            eprintln!("🚨 Error: {e}");
            eprintln!(
                "Make sure '{}' and '{}' exist; run the `train` binary first to create them.",
                paths.model.display(),
                paths.vectorizer.display()
            );
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", cli.host, cli.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}
