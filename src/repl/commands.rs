//! Command table
//!
//! Parses cleaned input words into a `Command` and describes every command
//! for `help`.

use crate::error::{PokedexError, Result};

/// Name, usage and description of a REPL command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays the names of the next 20 location areas in the Pokemon world",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Displays the names of the previous 20 location areas in the Pokemon world",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <location>",
        description: "Explore the pokemon available at a certain location",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Catch a pokemon and add it to your collection",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Inspect a pokemon in your collection",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "List all the pokemon you have caught",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses cleaned words; the first word names the command.
    ///
    /// Extra words after a command's argument are ignored.
    pub fn parse(words: &[String]) -> Result<Self> {
        let Some((name, args)) = words.split_first() else {
            return Err(PokedexError::UnknownCommand(String::new()));
        };

        match name.as_str() {
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            "map" => Ok(Command::Map),
            "mapb" => Ok(Command::MapBack),
            "explore" => required(args, "explore", "location area").map(Command::Explore),
            "catch" => required(args, "catch", "pokemon name").map(Command::Catch),
            "inspect" => required(args, "inspect", "pokemon name").map(Command::Inspect),
            "pokedex" => Ok(Command::Pokedex),
            other => Err(PokedexError::UnknownCommand(other.to_string())),
        }
    }
}

fn required(args: &[String], command: &'static str, argument: &'static str) -> Result<String> {
    args.first()
        .cloned()
        .ok_or(PokedexError::MissingArgument { command, argument })
}
