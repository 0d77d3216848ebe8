//! Colors for the two page themes. Every style in the TUI resolves through
//! a [`Palette`] so toggling the theme repaints everything at once.

use ratatui::style::{Color, Modifier, Style};

use crate::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::Gray,
                primary: Color::Cyan,
                accent: Color::Green,
                border: Color::DarkGray,
            },
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                primary: Color::Blue,
                accent: Color::Green,
                border: Color::Gray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn primary(&self) -> Style {
        self.base().fg(self.primary)
    }

    pub fn heading(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        self.base().fg(self.accent)
    }

    pub fn border(&self) -> Style {
        self.base().fg(self.border)
    }

    /// Selected tab / active nav item.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.fg, light.fg);
    }

    #[test]
    fn test_selected_inverts_primary() {
        let p = Palette::for_theme(Theme::Dark);
        let s = p.selected();
        assert_eq!(s.bg, Some(p.primary));
        assert_eq!(s.fg, Some(p.bg));
    }
}
