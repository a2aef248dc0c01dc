//! dg-core: Core game logic for a small dungeon crawler
//!
//! This crate contains all game rules with no terminal I/O.
//! Rendering and keyboard handling live in `dg-tui`; everything here is
//! driven through [`GameState::perform`] and is pure enough to test directly.

pub mod action;
pub mod dungeon;
pub mod object;
pub mod player;

mod config;
mod error;
mod gameloop;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use config::GameConfig;
pub use error::{ActionError, Capability, DomainError, GameError, MapError};
pub use gameloop::GameState;

/// Built-in map used when no map file is given
pub const DEFAULT_MAP: &str = include_str!("../maps/corridor.txt");

/// Color class requested by the core for anything it wants drawn.
///
/// The front end owns the mapping to concrete terminal colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ColorClass {
    /// Floors and walls
    Dim,
    /// Ordinary narration
    #[default]
    Normal,
    /// The player
    Bright,
    /// Notable items
    Highlight,
    /// Doors
    Wood,
    /// Failures, locks, keys
    Warning,
}

/// A character plus the color class it should be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub class: ColorClass,
}

impl Glyph {
    pub const fn new(ch: char, class: ColorClass) -> Self {
        Self { ch, class }
    }
}
