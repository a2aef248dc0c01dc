//! Player state and primitive actions
//!
//! Each primitive checks its preconditions before touching anything, so a
//! failure leaves both the player and the tile as they were.

use super::Inventory;
use crate::dungeon::{Position, Tile};
use crate::error::{ActionError, DomainError};
use crate::object::{Item, ItemId};
use crate::{ColorClass, Glyph};

/// The player character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            inventory: Inventory::new(),
        }
    }

    /// Create a player already carrying some items
    pub fn with_items(pos: Position, items: impl IntoIterator<Item = Item>) -> Self {
        let mut player = Self::new(pos);
        for item in items {
            player.inventory.push(item);
        }
        player
    }

    pub const fn glyph(&self) -> Glyph {
        Glyph::new('@', ColorClass::Bright)
    }

    /// Step onto a tile
    pub fn move_to(&mut self, tile: &Tile) -> Result<(), ActionError> {
        if !tile.passable() {
            return Err(DomainError::Blocked {
                obstacle: tile.name(),
            }
            .into());
        }
        self.pos = tile.pos();
        Ok(())
    }

    /// Pick up the item resting on a tile
    pub fn pickup(&mut self, tile: &mut Tile) -> Result<Item, ActionError> {
        let item = tile.take_item()?;
        self.inventory.push(item);
        tracing::trace!(item = %item, row = tile.pos().row, col = tile.pos().col, "picked up");
        Ok(item)
    }

    /// Drop a carried item onto a tile
    pub fn drop(&mut self, tile: &mut Tile, item: Option<ItemId>) -> Result<Item, ActionError> {
        let id = item
            .filter(|id| self.inventory.contains(*id))
            .ok_or(DomainError::NoSuchItem)?;
        let pos = tile.pos();
        let slot = tile.free_slot()?;
        let item = self.inventory.remove(id).ok_or(DomainError::NoSuchItem)?;
        *slot = Some(item);
        tracing::trace!(item = %item, row = pos.row, col = pos.col, "dropped");
        Ok(item)
    }

    pub fn open(&mut self, tile: &mut Tile) -> Result<(), ActionError> {
        tile.open()
    }

    pub fn close(&mut self, tile: &mut Tile) -> Result<(), ActionError> {
        tile.close()
    }

    /// Use a carried item on a tile
    pub fn use_item(
        &mut self,
        tile: &mut Tile,
        item: ItemId,
    ) -> Result<Option<&'static str>, ActionError> {
        let item = self.inventory.get(item).ok_or(DomainError::NoSuchItem)?;
        tile.use_item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{DoorState, TileKind};
    use crate::error::Capability;
    use crate::object::{ItemIds, ItemKind};

    fn tile(kind: TileKind) -> Tile {
        Tile::new(Position::new(2, 3), kind)
    }

    #[test]
    fn test_move_onto_floor() {
        let mut player = Player::new(Position::new(2, 2));
        player.move_to(&tile(TileKind::floor())).unwrap();
        assert_eq!(player.pos, Position::new(2, 3));
    }

    #[test]
    fn test_move_blocked() {
        let mut player = Player::new(Position::new(2, 2));
        let err = player.move_to(&tile(TileKind::Wall)).unwrap_err();
        assert_eq!(err.to_string(), "a wall blocks your way");

        let err = player.move_to(&tile(TileKind::door())).unwrap_err();
        assert_eq!(err.to_string(), "a door blocks your way");
        assert_eq!(player.pos, Position::new(2, 2));
    }

    #[test]
    fn test_pickup_transfers_item() {
        let mut ids = ItemIds::new();
        let key = ids.spawn(ItemKind::Key);
        let mut floor = tile(TileKind::Floor { item: Some(key) });
        let mut player = Player::new(Position::new(2, 3));

        assert_eq!(player.pickup(&mut floor), Ok(key));
        assert!(floor.item().is_none());
        assert!(player.inventory.contains(key.id));

        assert_eq!(
            player.pickup(&mut floor),
            Err(DomainError::NothingHere.into())
        );
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_pickup_appends() {
        let mut ids = ItemIds::new();
        let knife = ids.spawn(ItemKind::Knife);
        let key = ids.spawn(ItemKind::Key);
        let mut player = Player::with_items(Position::new(2, 3), [knife]);
        let mut floor = tile(TileKind::Floor { item: Some(key) });

        player.pickup(&mut floor).unwrap();
        assert_eq!(player.inventory.select(2), Some(&key));
    }

    #[test]
    fn test_drop_without_selection() {
        let mut ids = ItemIds::new();
        let knife = ids.spawn(ItemKind::Knife);
        let mut player = Player::with_items(Position::new(2, 3), [knife]);
        let mut floor = tile(TileKind::floor());

        let err = player.drop(&mut floor, None).unwrap_err();
        assert_eq!(err.to_string(), "you don't have such an item");
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_drop_onto_occupied_floor_is_atomic() {
        let mut ids = ItemIds::new();
        let knife = ids.spawn(ItemKind::Knife);
        let key = ids.spawn(ItemKind::Key);
        let mut player = Player::with_items(Position::new(2, 3), [knife]);
        let mut floor = tile(TileKind::Floor { item: Some(key) });

        let err = player.drop(&mut floor, Some(knife.id)).unwrap_err();
        assert_eq!(err, DomainError::NoSpace.into());
        assert!(player.inventory.contains(knife.id));
        assert_eq!(floor.item(), Some(&key));
    }

    #[test]
    fn test_drop_places_item() {
        let mut ids = ItemIds::new();
        let knife = ids.spawn(ItemKind::Knife);
        let mut player = Player::with_items(Position::new(2, 3), [knife]);
        let mut floor = tile(TileKind::floor());

        assert_eq!(player.drop(&mut floor, Some(knife.id)), Ok(knife));
        assert!(player.inventory.is_empty());
        assert_eq!(floor.item(), Some(&knife));
    }

    #[test]
    fn test_drop_item_not_carried() {
        let mut ids = ItemIds::new();
        let stray = ids.spawn(ItemKind::Key);
        let mut player = Player::new(Position::new(2, 3));
        let mut floor = tile(TileKind::floor());

        assert_eq!(
            player.drop(&mut floor, Some(stray.id)),
            Err(DomainError::NoSuchItem.into())
        );
        assert!(floor.item().is_none());
    }

    #[test]
    fn test_use_key_through_player() {
        let mut ids = ItemIds::new();
        let key = ids.spawn(ItemKind::Key);
        let mut player = Player::with_items(Position::new(2, 2), [key]);
        let mut door = tile(TileKind::locked_door());

        assert_eq!(player.use_item(&mut door, key.id), Ok(Some("door is unlocked")));
        player.open(&mut door).unwrap();
        assert_eq!(door.door_state(), Some(DoorState::Open));
        assert_eq!(
            player.use_item(&mut door, key.id),
            Err(DomainError::DoorIsOpen.into())
        );
    }

    #[test]
    fn test_open_wall_is_unsupported() {
        let mut player = Player::new(Position::new(2, 2));
        let mut wall = tile(TileKind::Wall);
        assert_eq!(
            player.open(&mut wall),
            Err(ActionError::Unsupported(Capability::Open))
        );
    }
}
