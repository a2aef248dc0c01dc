//! Dungeon structure: tiles and the grid that holds them

mod grid;
mod tile;

use serde::{Deserialize, Serialize};

use crate::action::Direction;

pub use grid::{Grid, make_tile};
pub use tile::{Capabilities, DoorState, Tile, TileKind};

/// A (row, column) location on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in the given direction
    pub const fn step(&self, dir: Direction) -> Self {
        let (drow, dcol) = dir.delta();
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}
