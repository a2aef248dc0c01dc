//! Game setup options

use serde::{Deserialize, Serialize};

use crate::dungeon::Position;
use crate::error::GameError;
use crate::object::ItemKind;

/// How a new game starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Where the player appears
    pub spawn: Position,
    /// What the player carries at the start, in inventory order
    pub starting_items: Vec<ItemKind>,
    /// First status line
    pub greeting: String,
}

impl GameConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn: Position::new(1, 1),
            starting_items: vec![ItemKind::Knife],
            greeting: "You stand in a corridor.".to_string(),
        }
    }
}
