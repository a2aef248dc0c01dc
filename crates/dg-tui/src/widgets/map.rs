//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use dg_core::GameState;
use dg_core::dungeon::Position as MapPosition;

use crate::theme::Theme;

/// Widget for rendering the grid with the player on top
pub struct MapWidget<'a> {
    game: &'a GameState,
    theme: &'a Theme,
}

impl<'a> MapWidget<'a> {
    pub fn new(game: &'a GameState, theme: &'a Theme) -> Self {
        Self { game, theme }
    }

    fn cell_display(&self, row: usize, col: usize) -> Option<(char, Style)> {
        let glyph = self
            .game
            .glyph_at(MapPosition::new(row as i32, col as i32))?;
        Some((glyph.ch, self.theme.style(glyph.class)))
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title("Dungeon");

        let inner = block.inner(area);
        block.render(area, buf);

        for (y, row) in self
            .game
            .grid()
            .rows()
            .iter()
            .enumerate()
            .take(inner.height as usize)
        {
            for x in 0..row.len().min(inner.width as usize) {
                let Some((ch, style)) = self.cell_display(y, x) else {
                    continue;
                };
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
