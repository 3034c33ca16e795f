//! REPL Module
//!
//! Line-oriented command loop over the catalog client.
//!
//! # Commands
//! - `help` - List commands
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List creatures found in an area
//! - `catch <pokemon>` - Try to catch a creature
//! - `inspect <pokemon>` - Show a caught creature
//! - `pokedex` - List caught creatures
//! - `exit` - Leave the REPL

pub mod commands;
pub mod input;
pub mod session;

pub use commands::{Command, CommandInfo, COMMANDS};
pub use input::clean_input;
pub use session::{MapCursor, Session};

use std::io::Write;
use std::ops::ControlFlow;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::client::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::pokedex::throw_ball;

/// Printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

// == REPL ==
/// A REPL bound to one client and one session.
pub struct Repl {
    client: PokeApiClient,
    session: Session,
}

impl Repl {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_session(client, Session::new())
    }

    pub fn with_session(client: PokeApiClient, session: Session) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Run Loop ==
    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Command failures are reported on `out` and the loop continues; only
    /// failures to read input or write output end the loop with an error.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                return Ok(());
            };

            match self.execute(&line, out).await {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => return Ok(()),
                Err(PokedexError::Io(err)) => return Err(err.into()),
                Err(err) => {
                    debug!(line = line.as_str(), error = %err, "command failed");
                    writeln!(out, "Error: {}", err)?;
                }
            }
        }
    }

    // == Dispatch ==
    /// Runs a single input line. Returns `Break` when the REPL should stop.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<ControlFlow<()>> {
        let words = clean_input(line);
        if words.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        let command = match Command::parse(&words) {
            Ok(command) => command,
            Err(PokedexError::UnknownCommand(name)) => {
                debug!(name = name.as_str(), "unknown command");
                writeln!(out, "Unknown command")?;
                return Ok(ControlFlow::Continue(()));
            }
            Err(err) => return Err(err),
        };

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(ControlFlow::Break(()));
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list(out)?,
        }

        Ok(ControlFlow::Continue(()))
    }

    // == Command Handlers ==
    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for info in COMMANDS {
            writeln!(out, "{}: {}", info.usage, info.description)?;
        }
        Ok(())
    }

    // == Map Paging ==
    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let cursor = &self.session.cursor;
        let url = match (&cursor.next, cursor.started) {
            (Some(next), _) => next.clone(),
            (None, false) => self.client.first_page_url(),
            (None, true) => {
                writeln!(out, "you're on the last page")?;
                return Ok(());
            }
        };

        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.session.cursor.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };

        self.show_page(&url, out).await
    }

    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;
        self.session.cursor.advance(page.next, page.previous);

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    // == Explore ==
    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        let location = self.client.location_area(area).await?;

        writeln!(out, "Exploring {}...", area)?;
        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, "- {}", name)?;
        }
        Ok(())
    }

    // == Catch ==
    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let pokemon = self.client.pokemon(name).await?;
        let session = &mut self.session;
        let caught =
            session.pokedex.contains(name) || throw_ball(&mut session.rng, pokemon.base_experience);

        if caught {
            session.pokedex.record(name, pokemon);
            writeln!(out, "{} was caught!", name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    // == Inspect ==
    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(pokemon) = self.session.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    // == Pokedex Listing ==
    fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Your Pokedex:")?;
        for name in self.session.pokedex.names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use std::time::Duration;

    fn offline_repl() -> Repl {
        let cache = TtlCache::new(Duration::from_secs(60));
        // Nothing listens here; tests below never reach the network
        let client = PokeApiClient::with_base_url("http://127.0.0.1:9", cache).unwrap();
        Repl::new(client)
    }

    async fn output_of(repl: &mut Repl, line: &str) -> (ControlFlow<()>, String) {
        let mut out = Vec::new();
        let flow = repl.execute(line, &mut out).await.unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_blank_line_is_ignored() {
        let mut repl = offline_repl();
        let (flow, out) = output_of(&mut repl, "   ").await;

        assert_eq!(flow, ControlFlow::Continue(()));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let mut repl = offline_repl();
        let (_, out) = output_of(&mut repl, "HELP").await;

        assert!(out.starts_with("Welcome to the Pokedex!\nUsage:\n\n"));
        for info in COMMANDS {
            assert!(out.contains(info.usage), "help should mention {}", info.name);
        }
    }

    #[tokio::test]
    async fn test_exit_breaks() {
        let mut repl = offline_repl();
        let (flow, out) = output_of(&mut repl, "exit").await;

        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(out, "Closing the Pokedex... Goodbye!\n");
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let mut repl = offline_repl();
        let (flow, out) = output_of(&mut repl, "fly").await;

        assert_eq!(flow, ControlFlow::Continue(()));
        assert_eq!(out, "Unknown command\n");
    }

    #[tokio::test]
    async fn test_mapb_before_any_page() {
        let mut repl = offline_repl();
        let (_, out) = output_of(&mut repl, "mapb").await;

        assert_eq!(out, "you're on the first page\n");
    }

    #[tokio::test]
    async fn test_inspect_uncaught() {
        let mut repl = offline_repl();
        let (_, out) = output_of(&mut repl, "inspect pikachu").await;

        assert_eq!(out, "you have not caught that pokemon\n");
    }

    #[tokio::test]
    async fn test_empty_pokedex() {
        let mut repl = offline_repl();
        let (_, out) = output_of(&mut repl, "pokedex").await;

        assert_eq!(out, "Your Pokedex:\n");
    }

    #[tokio::test]
    async fn test_missing_argument_is_error() {
        let mut repl = offline_repl();
        let mut out = Vec::new();

        let result = repl.execute("explore", &mut out).await;

        assert!(matches!(result, Err(PokedexError::MissingArgument { command: "explore", .. })));
    }

    #[tokio::test]
    async fn test_run_reports_errors_and_stops_at_eof() {
        let mut repl = offline_repl();
        let mut out = Vec::new();

        repl.run(&b"catch\nmapb\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Pokedex > Error: missing pokemon name for 'catch'\n\
             Pokedex > you're on the first page\n\
             Pokedex > \n"
        );
    }

    #[tokio::test]
    async fn test_run_stops_at_exit() {
        let mut repl = offline_repl();
        let mut out = Vec::new();

        repl.run(&b"exit\nhelp\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "Pokedex > Closing the Pokedex... Goodbye!\n");
    }
}
