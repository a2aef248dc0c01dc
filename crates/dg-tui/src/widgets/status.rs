//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use dg_core::action::Outcome;

use crate::theme::Theme;

/// Hint shown at the right edge of the status line
const HELP_HINT: &str = "?: help";

/// Widget for rendering the status line
pub struct StatusWidget<'a> {
    status: &'a Outcome,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(status: &'a Outcome, theme: &'a Theme) -> Self {
        Self { status, theme }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.style(self.status.severity.class());
        buf.set_stringn(area.x, area.y, &self.status.message, area.width as usize, style);

        let hint_width = HELP_HINT.len() as u16;
        let message_width = self.status.message.chars().count() as u16;
        if area.width > message_width + hint_width {
            buf.set_string(
                area.x + area.width - hint_width,
                area.y,
                HELP_HINT,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
