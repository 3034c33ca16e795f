//! Session state
//!
//! Everything a REPL run remembers between commands.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::pokedex::Pokedex;

/// Pagination cursor over the location-area listing.
#[derive(Debug, Default)]
pub struct MapCursor {
    /// Whether any page has been shown yet
    pub started: bool,
    /// Link to the page after the one last shown
    pub next: Option<String>,
    /// Link to the page before the one last shown
    pub previous: Option<String>,
}

impl MapCursor {
    /// Moves the cursor to a page that was just shown.
    pub fn advance(&mut self, next: Option<String>, previous: Option<String>) {
        self.started = true;
        self.next = next;
        self.previous = previous;
    }
}

/// Per-run REPL state.
#[derive(Debug)]
pub struct Session {
    pub cursor: MapCursor,
    pub pokedex: Pokedex,
    pub rng: StdRng,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Session with a caller-chosen random source, e.g. a seeded one in tests.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            cursor: MapCursor::default(),
            pokedex: Pokedex::new(),
            rng,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
