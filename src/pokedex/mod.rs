//! Pokedex Module
//!
//! The player's collection of caught creatures and the odds of catching one.

mod catch;

pub use catch::throw_ball;

use std::collections::BTreeMap;

use crate::models::Pokemon;

// == Pokedex ==
/// Caught creatures keyed by name, kept sorted for listing.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    /// Creates an empty pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught creature. A repeat catch keeps the first record.
    pub fn record(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.caught.entry(name.into()).or_insert(pokemon);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Names of every caught creature in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }
}
