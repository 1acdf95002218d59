pub mod commands;
pub mod error;
pub mod narrator;
pub mod page;
pub mod persistence;
pub mod speech;
pub mod state;
pub mod storage;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use error::{PageError, SpeechError, StorageError};
pub use narrator::{NarrationOutcome, NarratorController};

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting Poem Narrator v{}", env!("CARGO_PKG_VERSION"));

    let cli = commands::Cli::parse();
    commands::execute(cli)
}
