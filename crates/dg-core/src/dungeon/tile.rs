//! Map tiles and the door state machine
//!
//! Door states:
//! - OPEN (passable)
//! - CLOSED (initial state of a plain door)
//! - LOCKED (initial state of a lockable door, only reachable on lockable doors)
//!
//! Plain doors toggle OPEN <-> CLOSED. Lockable doors additionally toggle
//! CLOSED <-> LOCKED when a key is used on them.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::Position;
use crate::error::{ActionError, Capability, DomainError};
use crate::object::Item;
use crate::{ColorClass, Glyph};

/// Door state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DoorState {
    Open,
    Closed,
    Locked,
}

bitflags! {
    /// What a tile supports beyond being looked at
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        const OPEN = 0x01;
        const CLOSE = 0x02;
        const USE = 0x04;
        const LOCK = 0x08;
    }
}

impl From<Capability> for Capabilities {
    fn from(cap: Capability) -> Self {
        match cap {
            Capability::Open => Capabilities::OPEN,
            Capability::Close => Capabilities::CLOSE,
            Capability::Use => Capabilities::USE,
        }
    }
}

/// Terrain variant plus its per-variant state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Wall,
    Floor { item: Option<Item> },
    Door { state: DoorState, lockable: bool },
}

impl TileKind {
    pub const fn floor() -> Self {
        TileKind::Floor { item: None }
    }

    pub const fn door() -> Self {
        TileKind::Door {
            state: DoorState::Closed,
            lockable: false,
        }
    }

    pub const fn locked_door() -> Self {
        TileKind::Door {
            state: DoorState::Locked,
            lockable: true,
        }
    }
}

/// One fixed-position cell of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pos: Position,
    kind: TileKind,
}

impl Tile {
    pub const fn new(pos: Position, kind: TileKind) -> Self {
        Self { pos, kind }
    }

    pub const fn pos(&self) -> Position {
        self.pos
    }

    pub const fn kind(&self) -> &TileKind {
        &self.kind
    }

    /// Capability table for this tile's variant
    pub const fn capabilities(&self) -> Capabilities {
        match self.kind {
            TileKind::Wall | TileKind::Floor { .. } => Capabilities::empty(),
            TileKind::Door { lockable: false, .. } => Capabilities::OPEN
                .union(Capabilities::CLOSE)
                .union(Capabilities::USE),
            TileKind::Door { lockable: true, .. } => Capabilities::OPEN
                .union(Capabilities::CLOSE)
                .union(Capabilities::USE)
                .union(Capabilities::LOCK),
        }
    }

    pub fn supports(&self, cap: Capability) -> bool {
        self.capabilities().contains(cap.into())
    }

    fn require(&self, cap: Capability) -> Result<(), ActionError> {
        if self.supports(cap) {
            Ok(())
        } else {
            Err(ActionError::Unsupported(cap))
        }
    }

    /// Check if the player can stand here
    pub const fn passable(&self) -> bool {
        match self.kind {
            TileKind::Wall => false,
            TileKind::Floor { .. } => true,
            TileKind::Door { state, .. } => matches!(state, DoorState::Open),
        }
    }

    /// Door state, if this is a door
    pub const fn door_state(&self) -> Option<DoorState> {
        match self.kind {
            TileKind::Door { state, .. } => Some(state),
            _ => None,
        }
    }

    /// Name used in narration
    pub const fn name(&self) -> &'static str {
        match self.kind {
            TileKind::Wall => "wall",
            TileKind::Floor { .. } => "floor",
            TileKind::Door { .. } => "door",
        }
    }

    /// Item resting here, if any
    pub const fn item(&self) -> Option<&Item> {
        match &self.kind {
            TileKind::Floor { item } => item.as_ref(),
            _ => None,
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self.kind {
            TileKind::Wall => Glyph::new('#', ColorClass::Dim),
            TileKind::Floor { item: Some(item) } => item.glyph(),
            TileKind::Floor { item: None } => Glyph::new('.', ColorClass::Dim),
            TileKind::Door { state, .. } => match state {
                DoorState::Open => Glyph::new('/', ColorClass::Wood),
                DoorState::Closed => Glyph::new('+', ColorClass::Wood),
                DoorState::Locked => Glyph::new('+', ColorClass::Warning),
            },
        }
    }

    /// Remove the resting item
    pub fn take_item(&mut self) -> Result<Item, DomainError> {
        match &mut self.kind {
            TileKind::Floor { item } => item.take().ok_or(DomainError::NothingHere),
            _ => Err(DomainError::NothingHere),
        }
    }

    /// The empty item slot, or `NoSpace` if there is none to fill
    pub fn free_slot(&mut self) -> Result<&mut Option<Item>, DomainError> {
        match &mut self.kind {
            TileKind::Floor { item } if item.is_none() => Ok(item),
            _ => Err(DomainError::NoSpace),
        }
    }

    pub fn open(&mut self) -> Result<(), ActionError> {
        self.require(Capability::Open)?;
        let pos = self.pos;
        let TileKind::Door { state, .. } = &mut self.kind else {
            return Err(ActionError::Unsupported(Capability::Open));
        };

        match *state {
            DoorState::Closed => {
                *state = DoorState::Open;
                tracing::trace!(row = pos.row, col = pos.col, "door opened");
                Ok(())
            }
            DoorState::Open => Err(DomainError::AlreadyOpen.into()),
            DoorState::Locked => Err(DomainError::Locked.into()),
        }
    }

    pub fn close(&mut self) -> Result<(), ActionError> {
        self.require(Capability::Close)?;
        let pos = self.pos;
        let TileKind::Door { state, .. } = &mut self.kind else {
            return Err(ActionError::Unsupported(Capability::Close));
        };

        match *state {
            DoorState::Open => {
                *state = DoorState::Closed;
                tracing::trace!(row = pos.row, col = pos.col, "door closed");
                Ok(())
            }
            DoorState::Closed | DoorState::Locked => Err(DomainError::AlreadyClosed.into()),
        }
    }

    /// Use an item on this tile.
    ///
    /// Returns a short description of what happened, or `None` when the
    /// item has no effect here.
    pub fn use_item(&mut self, item: &Item) -> Result<Option<&'static str>, ActionError> {
        self.require(Capability::Use)?;
        let lockable = self.capabilities().contains(Capabilities::LOCK);
        let pos = self.pos;
        let TileKind::Door { state, .. } = &mut self.kind else {
            return Err(ActionError::Unsupported(Capability::Use));
        };

        if lockable && item.unlocks() {
            return match *state {
                DoorState::Locked => {
                    *state = DoorState::Closed;
                    tracing::trace!(row = pos.row, col = pos.col, "door unlocked");
                    Ok(Some("door is unlocked"))
                }
                DoorState::Closed => {
                    *state = DoorState::Locked;
                    tracing::trace!(row = pos.row, col = pos.col, "door locked");
                    Ok(Some("door is locked"))
                }
                DoorState::Open => Err(DomainError::DoorIsOpen.into()),
            };
        }

        if item.is_blade() {
            Ok(Some("you stab at the door, leaving a mark"))
        } else {
            Ok(None)
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
