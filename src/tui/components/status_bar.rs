//! # StatusBar Component
//!
//! Bottom row: key hints on the left, the latest status message on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

const HINTS: &str = " q quit · t theme · 1-6 jump · n/p section · tab area · f filter";

pub struct StatusBar {
    pub status_message: String,
    pub palette: Palette,
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let status = Line::from(Span::styled(format!("{} ", self.status_message), p.primary()));
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(status.width() as u16),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(HINTS, p.muted()))).style(p.base()),
            left,
        );
        frame.render_widget(Paragraph::new(status).style(p.base()), right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_bar_shows_hints_and_message() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar {
            status_message: "Theme: light".to_string(),
            palette: Palette::for_theme(Theme::Light),
        };

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.starts_with(" q quit"));
        assert!(text.trim_end().ends_with("Theme: light"));
    }
}
