//! # qseed: Interview Question Seeder CLI
//!
//! Thin entrypoint: logging setup and error reporting. All command logic
//! lives in the `qseed_cli` library crate.

use anyhow::Result;
use clap::Parser;
use qseed_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

// --- Main Application Entry ---

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Setup logging on stderr so stdout only carries the report lines.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("qseed=warn,qseed_cli=warn"));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Run the command; any error ends the process with status 1.
    if let Err(e) = run(cli).await {
        eprintln!("[qseed error] {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
