//! Turn driver
//!
//! [`GameState`] owns the grid and the player. All
//! mutation goes through [`GameState::perform`], one action per turn.

use std::path::Path;

use crate::action::{Action, Direction, Outcome};
use crate::config::GameConfig;
use crate::dungeon::{Grid, Position};
use crate::error::GameError;
use crate::object::ItemIds;
use crate::player::Player;
use crate::Glyph;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    player: Player,
    turn: u64,
    status: Outcome,
}

impl GameState {
    /// Start a game on a textual layout
    pub fn new(config: &GameConfig, layout: &str) -> Result<Self, GameError> {
        let mut ids = ItemIds::new();
        let grid = Grid::parse(layout, &mut ids)?;
        Self::with_grid(config, grid, ids)
    }

    /// Start a game on a map file
    pub fn load(config: &GameConfig, path: impl AsRef<Path>) -> Result<Self, GameError> {
        let mut ids = ItemIds::new();
        let grid = Grid::load(path, &mut ids)?;
        Self::with_grid(config, grid, ids)
    }

    /// Start a game on an already-built grid. `ids` must be the counter the
    /// grid's items were spawned from.
    pub fn with_grid(config: &GameConfig, grid: Grid, mut ids: ItemIds) -> Result<Self, GameError> {
        let spawn = config.spawn;
        if !grid.tile(spawn).is_some_and(|t| t.passable()) {
            return Err(GameError::BadSpawn {
                row: spawn.row,
                col: spawn.col,
            });
        }

        let items: Vec<_> = config
            .starting_items
            .iter()
            .map(|kind| ids.spawn(*kind))
            .collect();
        let player = Player::with_items(spawn, items);
        tracing::info!(row = spawn.row, col = spawn.col, "player spawned");

        Ok(Self {
            grid,
            player,
            turn: 0,
            status: Outcome::normal(config.greeting.clone()),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Number of actions performed so far
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Current status line
    pub fn status(&self) -> &Outcome {
        &self.status
    }

    /// Replace the status line without spending a turn
    pub fn set_status(&mut self, status: Outcome) {
        self.status = status;
    }

    /// The position next to the player in a direction
    pub fn target(&self, dir: Direction) -> Position {
        self.player.pos.step(dir)
    }

    /// What should be drawn at a position
    pub fn glyph_at(&self, pos: Position) -> Option<Glyph> {
        if pos == self.player.pos {
            return Some(self.player.glyph());
        }
        self.grid.tile(pos).map(|tile| tile.glyph())
    }

    /// Items on the floor plus items carried
    pub fn item_count(&self) -> usize {
        let on_floor = self.grid.tiles().filter(|t| t.item().is_some()).count();
        on_floor + self.player.inventory.len()
    }

    /// Resolve one action and advance the turn
    pub fn perform(&mut self, action: &Action) -> &Outcome {
        self.status = action.perform(&mut self.player, &mut self.grid);
        self.turn += 1;
        &self.status
    }
}
