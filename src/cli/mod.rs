//! Command-line interface.
//!
//! - Argument parsing
//! - Version and usage display
//! - One-shot remote commands (`exhibitions`, `exhibition`, `artwork`, `search`)
//!
//! # Usage
//!
//! ```ignore
//! use museum_browser::cli::{parse_args, run_cli_command, run_remote_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! run_remote_command(command, source, favorites).await?;
//! ```

pub mod args;
pub mod output;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use version::{version_line, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::sync::Arc;

use crate::favorites::FavoritesStore;
use crate::screens::{BrowseScreen, ExhibitionScreen};
use crate::source::CollectionSource;
use crate::state::LoadState;

/// Run a command that needs no network.
///
/// # Returns
///
/// * `None` - The command talks to the collection; see [`run_remote_command`]
/// * `Some(Ok(()))` - The command ran
/// * `Some(Err(e))` - The arguments were invalid
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(reason) => {
            eprintln!("{}\n\n{}", reason, USAGE);
            Some(Err(eyre!("{}", reason)))
        }
        CliCommand::Exhibitions
        | CliCommand::Exhibition(_)
        | CliCommand::Artwork(_)
        | CliCommand::Search(_)
        | CliCommand::Shell => None,
    }
}

/// Run a one-shot remote command and print its result to stdout.
///
/// `Shell` is not handled here.
pub async fn run_remote_command(
    command: CliCommand,
    source: Arc<dyn CollectionSource>,
    favorites: &FavoritesStore,
) -> Result<()> {
    let text = match command {
        CliCommand::Exhibitions => {
            let browse = BrowseScreen::new(source);
            browse.activate().await;
            render(&browse.screen().load_state(), output::exhibition_list)?
        }
        CliCommand::Exhibition(id) => {
            let screen = ExhibitionScreen::new(source, id);
            screen.activate().await;
            render(&screen.screen().load_state(), |items| {
                output::artwork_list(items, favorites)
            })?
        }
        CliCommand::Artwork(id) => {
            let artwork = source.get_artwork(id).await.map_err(|e| {
                eprintln!("{}", output::error_line(&e));
                e
            })?;
            output::artwork_detail(&artwork, favorites.is_favorite(id))
        }
        CliCommand::Search(query) => {
            let result = source.search_artworks(query.trim()).await;
            let state = match result {
                Ok(items) => LoadState::Loaded(items),
                Err(err) => LoadState::Failed(err),
            };
            render(&state, |items| output::artwork_list(items, favorites))?
        }
        other => return Err(eyre!("not a remote command: {:?}", other)),
    };
    println!("{}", text);
    Ok(())
}

fn render<T>(state: &LoadState<T>, list: impl FnOnce(&[T]) -> String) -> Result<String> {
    match state {
        LoadState::Loaded(items) => Ok(list(items)),
        LoadState::Failed(err) => {
            eprintln!("{}", output::error_line(err));
            Err(err.clone().into())
        }
        LoadState::NotStarted | LoadState::InProgress => Err(eyre!("load did not finish")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::config::CollectionConfig;
    use crate::source::MuseumClient;
    use serde_json::json;

    fn source(response: MockResponse) -> Arc<dyn CollectionSource> {
        let http = MockHttpClient::new();
        http.set_default_response(response);
        let config = CollectionConfig::new()
            .with_base_url("https://museum.test")
            .with_api_key("k");
        Arc::new(MuseumClient::with_http(&config, http))
    }

    #[test]
    fn test_remote_commands_are_deferred() {
        assert!(run_cli_command(&CliCommand::Shell).is_none());
        assert!(run_cli_command(&CliCommand::Exhibitions).is_none());
    }

    #[test]
    fn test_invalid_command_is_an_error() {
        let result = run_cli_command(&CliCommand::Invalid("bad".to_string()));
        assert!(matches!(result, Some(Err(_))));
    }

    #[tokio::test]
    async fn test_search_command_prints_results() {
        let source = source(MockResponse::json(
            200,
            json!({"records": [{"id": 1, "title": "Cat"}]}),
        ));
        let result =
            run_remote_command(CliCommand::Search("cat".to_string()), source, &FavoritesStore::new())
                .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_artwork_fails() {
        let source = source(MockResponse::json(404, json!({"error": "Not Found"})));
        let result = run_remote_command(
            CliCommand::Artwork(crate::models::ArtworkId(9)),
            source,
            &FavoritesStore::new(),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_shell_is_not_a_one_shot() {
        let source = source(MockResponse::json(200, json!({"records": []})));
        let result = run_remote_command(CliCommand::Shell, source, &FavoritesStore::new()).await;
        assert!(result.is_err());
    }
}
