//! Item instances

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{ColorClass, Glyph};

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const NONE: ItemId = ItemId(0);

    pub fn next(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// What an item is
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Knife,
    Key,
}

impl ItemKind {
    /// Get the display glyph for this kind of item
    pub const fn glyph(&self) -> Glyph {
        match self {
            ItemKind::Knife => Glyph::new('(', ColorClass::Highlight),
            ItemKind::Key => Glyph::new(',', ColorClass::Warning),
        }
    }
}

/// An inert, named item. Identity is the id, not the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
}

impl Item {
    pub const fn new(id: ItemId, kind: ItemKind) -> Self {
        Self { id, kind }
    }

    pub const fn glyph(&self) -> Glyph {
        self.kind.glyph()
    }

    /// Whether this item works a lock
    pub const fn unlocks(&self) -> bool {
        matches!(self.kind, ItemKind::Key)
    }

    pub const fn is_blade(&self) -> bool {
        matches!(self.kind, ItemKind::Knife)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Hands out item identities. One per game.
#[derive(Debug, Clone)]
pub struct ItemIds {
    last: ItemId,
}

impl ItemIds {
    pub fn new() -> Self {
        Self { last: ItemId::NONE }
    }

    /// Create a fresh item of the given kind
    pub fn spawn(&mut self, kind: ItemKind) -> Item {
        self.last = self.last.next();
        Item::new(self.last, kind)
    }
}

impl Default for ItemIds {
    fn default() -> Self {
        Self::new()
    }
}
