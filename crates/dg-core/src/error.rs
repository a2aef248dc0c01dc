//! Error types for actions, map loading and game setup
//!
//! Two failure paths exist for player actions. A [`DomainError`] is a rule
//! the world refused (a locked door, an occupied floor); its message is the
//! reason shown to the player. [`ActionError::Unsupported`] means the target
//! has no such capability at all and carries no reason.

use std::io;

use strum::Display;
use thiserror::Error;

/// Optional tile capabilities an action can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Capability {
    Open,
    Close,
    Use,
}

/// A precondition the world refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("a {obstacle} blocks your way")]
    Blocked { obstacle: &'static str },

    #[error("there's nothing here")]
    NothingHere,

    #[error("you don't have such an item")]
    NoSuchItem,

    #[error("there's no space on the floor")]
    NoSpace,

    #[error("it's already open")]
    AlreadyOpen,

    #[error("it's already closed")]
    AlreadyClosed,

    #[error("it's locked")]
    Locked,

    #[error("door is open")]
    DoorIsOpen,

    #[error("there's nothing there")]
    OutOfBounds,
}

/// Failure of a player primitive or tile method
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("cannot {0} this")]
    Unsupported(Capability),
}

/// Errors raised while turning a textual layout into a grid
#[derive(Error, Debug)]
pub enum MapError {
    #[error("unknown map character {ch:?} at row {row}, column {col}")]
    UnknownTile { ch: char, row: usize, col: usize },

    #[error("map has no tiles")]
    Empty,

    #[error("could not read map '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while setting up a game
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("spawn point ({row}, {col}) is not a passable tile")]
    BadSpawn { row: i32, col: i32 },

    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),
}
