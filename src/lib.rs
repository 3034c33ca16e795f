//! Pokedex - A REPL client for the PokeAPI catalog
//!
//! Browses location areas and creature records, keeping recent API responses
//! in an in-memory cache whose entries are swept after a fixed TTL.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
mod tasks;

pub use cache::TtlCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
