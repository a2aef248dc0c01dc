//! Ordered inventory with 1-based selection for display

use crate::object::{Item, ItemId};

/// Items carried by the player, in pickup order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Select by the number shown to the player (1 is the first item)
    pub fn select(&self, number: usize) -> Option<&Item> {
        number.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    /// Prompt listing such as "1: knife, 2: key"
    pub fn listing(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| format!("{}: {}", idx + 1, item))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item with this id
    pub(crate) fn remove(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(idx))
    }
}
