//! Application state and main UI controller
//!
//! The app is the input-loop collaborator of the core: it turns keystrokes
//! (plus follow-up prompts for a direction or an inventory slot) into one
//! [`Action`] and hands it to [`GameState::perform`].

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use dg_core::GameState;
use dg_core::action::{Action, Outcome};
use dg_core::object::Item;

use crate::input::{Command, key_to_command, key_to_direction, key_to_slot};
use crate::theme::Theme;
use crate::widgets::{MapWidget, StatusWidget};

/// UI mode - what the app is currently waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Normal gameplay
    Normal,
    /// Selecting an inventory slot
    ItemSelect(PendingAction),
    /// Selecting a direction
    DirectionSelect(PendingAction),
}

/// Action waiting for additional input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Open,
    Close,
    Drop,
    Use,
    /// Use: item already selected, waiting for direction
    UseOn(Item),
}

/// Application state
pub struct App {
    /// Game state, the single writer of the world
    game: GameState,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,
}

impl App {
    pub fn new(game: GameState, theme: Theme) -> Self {
        Self {
            game,
            should_quit: false,
            mode: UiMode::Normal,
            theme,
        }
    }

    /// Get game state
    pub fn state(&self) -> &GameState {
        &self.game
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event - returns an action if one should be performed
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => None,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Quit is always available, even mid-prompt
        if key_to_command(key) == Some(Command::Quit) {
            self.should_quit = true;
            return None;
        }

        match std::mem::replace(&mut self.mode, UiMode::Normal) {
            UiMode::Normal => self.handle_normal_input(key),
            UiMode::ItemSelect(action) => self.handle_item_select_input(key, action),
            UiMode::DirectionSelect(action) => {
                Some(self.handle_direction_select_input(key, action))
            }
        }
    }

    /// Handle input in normal gameplay mode
    fn handle_normal_input(&mut self, key: KeyEvent) -> Option<Action> {
        let here = self.game.player().pos;
        let Some(command) = key_to_command(key) else {
            return Some(Action::wait());
        };

        match command {
            Command::Move(dir) => Some(Action::Move {
                target: self.game.target(dir),
            }),
            Command::Open => {
                self.enter_direction_select("Open what", PendingAction::Open);
                None
            }
            Command::Close => {
                self.enter_direction_select("Close what", PendingAction::Close);
                None
            }
            Command::PickUp => Some(Action::PickUp { target: here }),
            Command::Drop => {
                self.enter_item_select("Drop what", PendingAction::Drop);
                None
            }
            Command::Use => {
                self.enter_item_select("Use what", PendingAction::Use);
                None
            }
            Command::Help => Some(Action::help()),
            Command::Quit => {
                self.should_quit = true;
                None
            }
        }
    }

    /// Handle input while waiting for an inventory slot
    fn handle_item_select_input(&mut self, key: KeyEvent, action: PendingAction) -> Option<Action> {
        let item = key_to_slot(key).and_then(|n| self.game.player().inventory.select(n).copied());
        let here = self.game.player().pos;

        match (action, item) {
            // An empty selection still drops, so the player hears why it failed
            (PendingAction::Drop, item) => Some(Action::Drop { target: here, item }),
            (PendingAction::Use, Some(item)) => {
                self.enter_direction_select(&format!("Use {} on what", item), PendingAction::UseOn(item));
                None
            }
            _ => Some(Action::wait()),
        }
    }

    /// Handle input while waiting for a direction
    fn handle_direction_select_input(&mut self, key: KeyEvent, action: PendingAction) -> Action {
        let Some(dir) = key_to_direction(key) else {
            return Action::wait();
        };
        let target = self.game.target(dir);

        match action {
            PendingAction::Open => Action::Open { target },
            PendingAction::Close => Action::Close { target },
            PendingAction::UseOn(item) => Action::Use { target, item },
            PendingAction::Drop | PendingAction::Use => Action::wait(),
        }
    }

    /// Enter item selection mode; the prompt replaces the status line
    fn enter_item_select(&mut self, prompt: &str, action: PendingAction) {
        let listing = self.game.player().inventory.listing();
        self.game.set_status(Outcome::normal(format!("{} [{}]?", prompt, listing)));
        self.mode = UiMode::ItemSelect(action);
    }

    /// Enter direction selection mode
    fn enter_direction_select(&mut self, prompt: &str, action: PendingAction) {
        self.game.set_status(Outcome::normal(format!("{} [<arrows>]?", prompt)));
        self.mode = UiMode::DirectionSelect(action);
    }

    /// Perform an action and update state
    pub fn execute(&mut self, action: &Action) -> &Outcome {
        self.game.perform(action)
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: map at top, status line below
        let map_height = self.game.grid().height() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(map_height), // Map + border
                Constraint::Length(1),          // Status line
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(MapWidget::new(&self.game, &self.theme), chunks[0]);
        frame.render_widget(StatusWidget::new(self.game.status(), &self.theme), chunks[1]);
    }
}
