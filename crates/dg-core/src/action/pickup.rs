//! Picking up and dropping items

use super::Outcome;
use crate::dungeon::{Grid, Position};
use crate::error::DomainError;
use crate::object::Item;
use crate::player::Player;

/// Pick up the item resting on the target tile
pub fn do_pickup(player: &mut Player, grid: &mut Grid, target: Position) -> Outcome {
    let result = match grid.tile_mut(target) {
        Some(tile) => player.pickup(tile),
        None => Err(DomainError::NothingHere.into()),
    };

    match result {
        Ok(item) => Outcome::normal(format!("You pick up the {}", item)),
        Err(err) => Outcome::warning(format!("You can't pick that up: {}", err)),
    }
}

/// Drop an item from inventory onto the target tile
pub fn do_drop(
    player: &mut Player,
    grid: &mut Grid,
    target: Position,
    item: Option<&Item>,
) -> Outcome {
    let result = match grid.tile_mut(target) {
        Some(tile) => player.drop(tile, item.map(|i| i.id)),
        None => Err(DomainError::NoSpace.into()),
    };

    match result {
        Ok(item) => Outcome::normal(format!("You drop the {}", item)),
        Err(err) => Outcome::warning(format!("You can't drop that: {}", err)),
    }
}
