use museum_browser::cli::{parse_args, run_cli_command, run_remote_command, CliCommand};
use museum_browser::config::{CollectionConfig, API_KEY_ENV};
use museum_browser::favorites::FavoritesStore;
use museum_browser::shell::Shell;
use museum_browser::source::{CollectionSource, MuseumClient};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let command = parse_args(std::env::args());

    // Handle local commands before any initialization
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    color_eyre::install()?;
    init_tracing();

    let config = CollectionConfig::from_env();
    if !config.has_api_key() {
        return Err(eyre!(
            "no API key configured; set {} to your collection API key",
            API_KEY_ENV
        ));
    }
    tracing::debug!(base_url = %config.base_url, command = ?command, "Starting");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let source: Arc<dyn CollectionSource> = Arc::new(MuseumClient::new(&config)?);
        let favorites = FavoritesStore::new();

        match command {
            CliCommand::Shell => {
                let mut shell = Shell::new(source, favorites, &config);
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                shell.run(stdin, tokio::io::stdout()).await?;
                Ok(())
            }
            other => run_remote_command(other, source, &favorites).await,
        }
    })
}
