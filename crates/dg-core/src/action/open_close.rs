//! Opening, closing and using items on doors

use super::Outcome;
use crate::dungeon::{Grid, Position};
use crate::error::ActionError;
use crate::object::Item;
use crate::player::Player;

/// Open the door at the target position
pub fn do_open(player: &mut Player, grid: &mut Grid, target: Position) -> Outcome {
    let Some(tile) = grid.tile_mut(target) else {
        return Outcome::warning("There's nothing to open");
    };

    match player.open(tile) {
        Ok(()) => Outcome::normal(format!("You open the {}", tile)),
        Err(ActionError::Domain(err)) => {
            Outcome::warning(format!("You can't open the {}: {}", tile, err))
        }
        Err(ActionError::Unsupported(_)) => Outcome::warning("There's nothing to open"),
    }
}

/// Close the door at the target position
pub fn do_close(player: &mut Player, grid: &mut Grid, target: Position) -> Outcome {
    let Some(tile) = grid.tile_mut(target) else {
        return Outcome::warning("There's nothing to close");
    };

    match player.close(tile) {
        Ok(()) => Outcome::normal(format!("You close the {}", tile)),
        Err(ActionError::Domain(err)) => {
            Outcome::warning(format!("You can't close the {}: {}", tile, err))
        }
        Err(ActionError::Unsupported(_)) => Outcome::warning("There's nothing to close"),
    }
}

/// Use a carried item on the target tile
pub fn do_use(player: &mut Player, grid: &mut Grid, target: Position, item: &Item) -> Outcome {
    let Some(tile) = grid.tile_mut(target) else {
        return Outcome::warning("You don't know what to do with that");
    };

    match player.use_item(tile, item.id) {
        Ok(result) => Outcome::normal(format!(
            "You use the {} on the {}: {}",
            item,
            tile,
            result.unwrap_or("nothing happens")
        )),
        Err(ActionError::Domain(err)) => {
            Outcome::warning(format!("You can't use the {} on a {}: {}", item, tile, err))
        }
        Err(ActionError::Unsupported(_)) => {
            Outcome::warning("You don't know what to do with that")
        }
    }
}
