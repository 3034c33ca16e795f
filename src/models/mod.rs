//! Response models for the catalog API
//!
//! Serde shapes for the PokeAPI resources the REPL reads. Unknown fields are
//! ignored so the models only carry what the commands print.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Resource URL
    #[serde(default)]
    pub url: String,
}
