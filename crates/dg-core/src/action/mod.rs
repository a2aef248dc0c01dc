//! Player action system
//!
//! An [`Action`] is one resolved player intent. Performing it validates the
//! intent against the world, applies the change, and narrates the result as
//! an [`Outcome`]. Failures never escape: they come back as warning text.

pub mod movement;
pub mod open_close;
pub mod pickup;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::dungeon::{Grid, Position};
use crate::object::Item;
use crate::player::Player;
use crate::ColorClass;

/// Help line shown by the `?` command
pub const HELP_LINE: &str = "<arrows>: walk, O: open, C: close, P: pick up, D: drop, U: use";

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Get the delta (drow, dcol) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// How a status message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Warning,
}

impl Severity {
    pub const fn class(&self) -> ColorClass {
        match self {
            Severity::Normal => ColorClass::Normal,
            Severity::Warning => ColorClass::Warning,
        }
    }
}

/// Narrated result of performing an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub message: String,
    pub severity: Severity,
}

impl Outcome {
    pub fn normal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Normal,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// A player intent bound to its target
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum Action {
    /// Step onto the target tile
    Move { target: Position },
    /// Let a turn pass, showing the given message
    Wait { message: String, severity: Severity },
    Open { target: Position },
    Close { target: Position },
    /// Pick up whatever rests on the target tile
    PickUp { target: Position },
    /// Drop the selected item, if any was selected
    Drop { target: Position, item: Option<Item> },
    /// Use a carried item on the target tile
    Use { target: Position, item: Item },
}

impl Action {
    /// An idle turn
    pub fn wait() -> Self {
        Self::Wait {
            message: "You wait".to_string(),
            severity: Severity::Normal,
        }
    }

    /// An idle turn that shows the key help
    pub fn help() -> Self {
        Self::Wait {
            message: HELP_LINE.to_string(),
            severity: Severity::Normal,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Resolve the action against the world
    pub fn perform(&self, player: &mut Player, grid: &mut Grid) -> Outcome {
        let outcome = match self {
            Action::Move { target } => movement::do_move(player, grid, *target),
            Action::Wait { message, severity } => Outcome {
                message: message.clone(),
                severity: *severity,
            },
            Action::Open { target } => open_close::do_open(player, grid, *target),
            Action::Close { target } => open_close::do_close(player, grid, *target),
            Action::PickUp { target } => pickup::do_pickup(player, grid, *target),
            Action::Drop { target, item } => pickup::do_drop(player, grid, *target, item.as_ref()),
            Action::Use { target, item } => open_close::do_use(player, grid, *target, item),
        };

        tracing::debug!(
            action = self.name(),
            severity = %outcome.severity,
            message = %outcome.message,
            "action performed"
        );
        outcome
    }
}
