//! dg-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game: drawing, key handling and
//! the prompts that turn keystrokes into actions.

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod widgets;

pub use app::{App, PendingAction, UiMode};
pub use theme::Theme;
