//! Walking around

use super::Outcome;
use crate::dungeon::{Grid, Position};
use crate::error::DomainError;
use crate::player::Player;

/// Move the player onto the target tile
pub fn do_move(player: &mut Player, grid: &Grid, target: Position) -> Outcome {
    let Some(tile) = grid.tile(target) else {
        return blocked(&DomainError::OutOfBounds);
    };

    match player.move_to(tile) {
        Ok(()) => match tile.item() {
            Some(item) => Outcome::normal(format!("You walk. There is a {} on the floor.", item)),
            None => Outcome::normal("You walk"),
        },
        Err(err) => blocked(&err),
    }
}

fn blocked(reason: &dyn std::fmt::Display) -> Outcome {
    Outcome::warning(format!("You can't go that way: {}", reason))
}
