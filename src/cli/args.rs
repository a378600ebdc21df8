//! Command-line argument parsing for the museum browser.
//!
//! Flags win over subcommands; the first recognized subcommand decides the
//! rest of the parse.

use crate::models::ArtworkId;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// List current exhibitions
    Exhibitions,
    /// List the artworks of one exhibition
    Exhibition(u64),
    /// Show one artwork
    Artwork(ArtworkId),
    /// Run one remote search
    Search(String),
    /// Interactive shell (default)
    Shell,
    /// Arguments that could not be parsed, with the reason
    Invalid(String),
}

impl CliCommand {
    /// Whether this command talks to the collection API.
    pub fn needs_api(&self) -> bool {
        matches!(
            self,
            CliCommand::Exhibitions
                | CliCommand::Exhibition(_)
                | CliCommand::Artwork(_)
                | CliCommand::Search(_)
                | CliCommand::Shell
        )
    }
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
usage: museum-browser [COMMAND]

commands:
  exhibitions          list current exhibitions
  exhibition <id>      list the artworks of an exhibition
  artwork <id>         show one artwork
  search <query...>    search the collection
  shell                interactive browser (default)

flags:
  -h, --help           show this help
  -V, --version        show version

environment:
  MUSEUM_API_KEY       collection API key (required)
  MUSEUM_API_URL       collection API base URL
  RUST_LOG             log filter, e.g. museum_browser=debug";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use museum_browser::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["museum-browser".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    for arg in &args {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Shell;
    };

    match command.as_str() {
        "shell" => CliCommand::Shell,
        "exhibitions" => CliCommand::Exhibitions,
        "exhibition" => match rest.first().map(|id| id.trim().parse::<u64>()) {
            Some(Ok(id)) => CliCommand::Exhibition(id),
            Some(Err(_)) => CliCommand::Invalid(format!("invalid exhibition id: {}", rest[0])),
            None => CliCommand::Invalid("exhibition needs an id".to_string()),
        },
        "artwork" => match rest.first().map(|id| id.parse::<ArtworkId>()) {
            Some(Ok(id)) => CliCommand::Artwork(id),
            Some(Err(_)) => CliCommand::Invalid(format!("invalid artwork id: {}", rest[0])),
            None => CliCommand::Invalid("artwork needs an id".to_string()),
        },
        "search" => {
            let query = rest.join(" ");
            if query.trim().is_empty() {
                CliCommand::Invalid("search needs a query".to_string())
            } else {
                CliCommand::Search(query)
            }
        }
        other => CliCommand::Invalid(format!("unknown command: {}", other)),
    }
}
