//! The tile grid and the map-character factory
//!
//! Map legend:
//! - `.` floor
//! - `#` wall
//! - `+` door (starts closed)
//! - `1` lockable door (starts locked)
//! - `2` floor with a key on it

use std::fs;
use std::path::Path;

use super::{Position, Tile, TileKind};
use crate::error::MapError;
use crate::object::{ItemIds, ItemKind};

/// Build the tile for one map character
pub fn make_tile(ch: char, row: usize, col: usize, ids: &mut ItemIds) -> Result<Tile, MapError> {
    let kind = match ch {
        '.' => TileKind::floor(),
        '#' => TileKind::Wall,
        '+' => TileKind::door(),
        '1' => TileKind::locked_door(),
        '2' => TileKind::Floor {
            item: Some(ids.spawn(ItemKind::Key)),
        },
        _ => return Err(MapError::UnknownTile { ch, row, col }),
    };
    Ok(Tile::new(Position::new(row as i32, col as i32), kind))
}

/// Rows of tiles, built once from a layout. Rows may differ in length.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    /// Parse a textual layout
    pub fn parse(layout: &str, ids: &mut ItemIds) -> Result<Self, MapError> {
        let mut rows = Vec::new();
        for (row, line) in layout.lines().enumerate() {
            let tiles = line
                .trim_end()
                .chars()
                .enumerate()
                .map(|(col, ch)| make_tile(ch, row, col, ids))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(tiles);
        }

        if rows.iter().all(Vec::is_empty) {
            return Err(MapError::Empty);
        }

        let grid = Self { rows };
        tracing::info!(
            rows = grid.height(),
            tiles = grid.tiles().count(),
            "map loaded"
        );
        Ok(grid)
    }

    /// Read and parse a map file
    pub fn load(path: impl AsRef<Path>, ids: &mut ItemIds) -> Result<Self, MapError> {
        let path = path.as_ref();
        let layout = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&layout, ids)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten()
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.rows.get(row)?.get(col)
    }

    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        self.rows.get_mut(row)?.get_mut(col)
    }
}
