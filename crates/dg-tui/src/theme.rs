//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or DG_LIGHT_BG=1 environment variable.

use dg_core::ColorClass;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI.
/// The core only hands out color classes; this is the one place they become
/// terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Frame around the map
    pub border: Color,
    /// Secondary/hint text ("?: help")
    pub text_dim: Color,

    // Color classes
    pub dim: Color,
    pub normal: Color,
    pub bright: Color,
    pub highlight: Color,
    pub wood: Color,
    pub warning: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            border: Color::Gray,
            text_dim: Color::DarkGray,
            dim: Color::DarkGray,
            normal: Color::Gray,
            bright: Color::White,
            highlight: Color::LightYellow,
            wood: Color::Yellow,
            warning: Color::Red,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            border: Color::DarkGray,
            text_dim: Color::Gray,
            dim: Color::Gray,
            normal: Color::DarkGray,
            bright: Color::Black,
            highlight: Color::Yellow,
            wood: Color::Yellow,
            warning: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and DG_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Terminal color for a core color class
    pub fn color(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Dim => self.dim,
            ColorClass::Normal => self.normal,
            ColorClass::Bright => self.bright,
            ColorClass::Highlight => self.highlight,
            ColorClass::Wood => self.wood,
            ColorClass::Warning => self.warning,
        }
    }

    /// Full style for a color class; bright and highlight are bold
    pub fn style(&self, class: ColorClass) -> Style {
        let style = Style::default().fg(self.color(class));
        match class {
            ColorClass::Bright | ColorClass::Highlight => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }

    fn is_light_background() -> bool {
        // DG_LIGHT_BG=1 or =true wins over anything the terminal reports
        if let Ok(val) = std::env::var("DG_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" (sometimes "fg;default;bg"); the last field is
        // the background's palette index. 7 and 9-15 are the pale ones.
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
