//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself is
//! infallible; these errors come from fetching, decoding and command parsing.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}) for {url}")]
    Api { status: u16, url: String },

    /// API answered 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing REPL output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was invoked without its required argument
    #[error("missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Input did not name a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
