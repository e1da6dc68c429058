use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use memobox::config::ServerConfig;
use memobox::server::{self, AppState};
use memobox::storage;

#[derive(Parser)]
#[command(name = "memobox", about = "Spaced-repetition flashcard backend", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind, e.g. 127.0.0.1:8080 (overrides the config file)
    #[arg(long)]
    bind: Option<String>,

    /// Data directory for goals and items (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::load_default(),
    };
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }

    let data_dir = match config.data_dir.clone() {
        Some(dir) => dir,
        None => storage::default_data_dir()?,
    };
    log::info!("Using data directory {}", data_dir.display());

    let state = AppState::new(data_dir).context("failed to initialize storage")?;
    server::serve(state, &config.bind).await
}
