//! Line-oriented interactive browser.
//!
//! Each view maps to one screen controller; switching to a view activates
//! it again, the way returning to a tab does.

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;

use crate::cli::output;
use crate::config::CollectionConfig;
use crate::favorites::FavoritesStore;
use crate::models::{Artwork, ArtworkId};
use crate::screens::{BrowseScreen, ExhibitionScreen, FavoritesScreen, Screen, SearchScreen};
use crate::source::CollectionSource;
use crate::state::{LoadState, ScreenState, Searchable};

pub const SHELL_HELP: &str = "\
  browse [filter]    exhibitions
  open <id>          artworks of an exhibition
  fav <artwork-id>   toggle a favorite
  favs [filter]      favorites
  search <text>      search the collection
  filter <text>      filter the current list (empty clears)
  help               this help
  quit";

const PROMPT: &str = "museum> ";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Browse(String),
    Open(u64),
    Fav(ArtworkId),
    Favs(String),
    Search(String),
    Filter(String),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parse one input line.
pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word {
        "" => ShellCommand::Empty,
        "browse" | "b" => ShellCommand::Browse(rest.to_string()),
        "open" | "o" => match rest.parse() {
            Ok(id) => ShellCommand::Open(id),
            Err(_) => ShellCommand::Invalid(format!("open needs an exhibition id, got '{}'", rest)),
        },
        "fav" | "f" => match rest.parse() {
            Ok(id) => ShellCommand::Fav(id),
            Err(_) => ShellCommand::Invalid(format!("fav needs an artwork id, got '{}'", rest)),
        },
        "favs" => ShellCommand::Favs(rest.to_string()),
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "filter" => ShellCommand::Filter(rest.to_string()),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => ShellCommand::Invalid(format!("unknown command '{}'; try help", other)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Browse,
    Exhibition,
    Favorites,
    Search,
}

/// Interactive session over one source and one favorites store.
pub struct Shell {
    source: Arc<dyn CollectionSource>,
    favorites: FavoritesStore,
    browse: BrowseScreen,
    exhibition: Option<ExhibitionScreen>,
    favorites_screen: FavoritesScreen,
    search: SearchScreen,
    view: View,
}

impl Shell {
    pub fn new(
        source: Arc<dyn CollectionSource>,
        favorites: FavoritesStore,
        config: &CollectionConfig,
    ) -> Self {
        Self {
            browse: BrowseScreen::new(Arc::clone(&source)),
            exhibition: None,
            favorites_screen: FavoritesScreen::new(Arc::clone(&source), favorites.clone()),
            search: SearchScreen::with_debounce(Arc::clone(&source), config.search_debounce),
            source,
            favorites,
            view: View::Browse,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Read commands from `input` until EOF or `quit`.
    pub async fn run<R, W>(&mut self, input: R, mut out: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        out.write_all(format!("{}\n{}\n", output::header("MUSEUM BROWSER"), SHELL_HELP).as_bytes())
            .await?;
        loop {
            out.write_all(PROMPT.as_bytes()).await?;
            out.flush().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match self.execute(parse_line(&line)).await {
                Some(text) if text.is_empty() => {}
                Some(text) => out.write_all(format!("{}\n", text).as_bytes()).await?,
                None => break,
            }
        }
        out.flush().await
    }

    /// Execute one command. `None` ends the session.
    pub async fn execute(&mut self, command: ShellCommand) -> Option<String> {
        tracing::debug!(command = ?command, "Shell command");
        let text = match command {
            ShellCommand::Empty => String::new(),
            ShellCommand::Quit => return None,
            ShellCommand::Help => SHELL_HELP.to_string(),
            ShellCommand::Invalid(reason) => reason,
            ShellCommand::Browse(filter) => {
                self.view = View::Browse;
                self.browse.screen().set_filter(&filter);
                self.browse.activate().await;
                self.render()
            }
            ShellCommand::Open(id) => {
                let screen = ExhibitionScreen::new(Arc::clone(&self.source), id);
                screen.activate().await;
                self.exhibition = Some(screen);
                self.view = View::Exhibition;
                self.render()
            }
            ShellCommand::Fav(id) => {
                if self.favorites.toggle(id) {
                    format!("♥ added {} to favorites", id)
                } else {
                    format!("removed {} from favorites", id)
                }
            }
            ShellCommand::Favs(filter) => {
                self.view = View::Favorites;
                self.favorites_screen.screen().set_filter(&filter);
                self.favorites_screen.activate().await;
                self.render()
            }
            ShellCommand::Search(text) => {
                self.view = View::Search;
                self.run_search(&text).await
            }
            ShellCommand::Filter(text) => {
                match self.view {
                    View::Browse => self.browse.screen().set_filter(&text),
                    View::Exhibition => {
                        if let Some(screen) = &self.exhibition {
                            screen.screen().set_filter(&text);
                        }
                    }
                    View::Favorites => self.favorites_screen.screen().set_filter(&text),
                    View::Search => self.search.screen().set_filter(&text),
                }
                self.render()
            }
        };
        Some(text)
    }

    /// Type `text` into the search screen and wait for its result.
    async fn run_search(&self, text: &str) -> String {
        let mut rx = self.search.screen().subscribe();
        let before = rx.borrow_and_update().seq();
        self.search.set_query(text);
        if text.trim().is_empty() {
            return "search cleared".to_string();
        }
        if wait_for_newer_terminal(&mut rx, before).await {
            self.render()
        } else {
            "search was interrupted".to_string()
        }
    }

    fn render(&self) -> String {
        match self.view {
            View::Browse => render_screen(self.browse.screen(), "EXHIBITIONS", output::exhibition_list),
            View::Exhibition => match &self.exhibition {
                Some(screen) => render_screen(
                    screen.screen(),
                    &format!("EXHIBITION {}", screen.exhibition_id()),
                    |items| output::artwork_list(items, &self.favorites),
                ),
                None => "no exhibition open".to_string(),
            },
            View::Favorites => {
                let mut text = render_screen(self.favorites_screen.screen(), "FAVORITES", |items| {
                    output::artwork_list(items, &self.favorites)
                });
                if let Some(warning) = self.favorites_screen.warning() {
                    text.push_str(&format!("\n! {}", warning));
                }
                text
            }
            View::Search => render_screen(
                self.search.screen(),
                &format!("SEARCH \"{}\"", self.search.query().trim()),
                |items| output::artwork_list(items, &self.favorites),
            ),
        }
    }
}

/// Wait for a terminal state from a fetch started after `seq`.
async fn wait_for_newer_terminal(rx: &mut watch::Receiver<ScreenState<Artwork>>, seq: u64) -> bool {
    loop {
        if rx.changed().await.is_err() {
            return false;
        }
        let state = rx.borrow_and_update();
        if state.seq() > seq && state.load_state().is_terminal() {
            return true;
        }
    }
}

fn render_screen<T: Clone + Searchable>(
    screen: &Screen<T>,
    title: &str,
    list: impl FnOnce(&[T]) -> String,
) -> String {
    let state = screen.load_state();
    let body = match &state {
        LoadState::Loaded(_) => list(&screen.displayed()),
        other => output::status_line(other).unwrap_or_default(),
    };
    let filter = screen.with_state(|s| s.filter().to_string());
    if filter.is_empty() {
        format!("{}\n{}", output::header(title), body)
    } else {
        format!("{} (filter: {})\n{}", output::header(title), filter, body)
    }
}
