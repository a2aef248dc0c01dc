//! Items the player can carry and leave on the floor

mod item;

pub use item::{Item, ItemId, ItemIds, ItemKind};
