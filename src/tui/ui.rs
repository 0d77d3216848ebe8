use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use crate::core::state::{App, SectionId};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Page, StatusBar, TitleBar, nav_hit_test};
use crate::tui::theme::Palette;

/// Split the frame into nav bar (2 rows), page, status bar.
fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(2), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let palette = Palette::for_theme(app.theme);
    let [title_area, page_area, status_area] = layout(frame.area());

    frame.render_widget(Block::new().style(palette.base()), frame.area());

    // Page first: it refreshes the layout the title bar reports on.
    Page::new(&mut tui.page, app, palette, now).render(frame, page_area);

    TitleBar {
        monogram: app.content.monogram(),
        active: tui.page.current_section(),
        theme: app.theme,
        progress: tui.page.progress(),
        palette,
    }
    .render(frame, title_area);

    StatusBar {
        status_message: app.status_message.clone(),
        palette,
    }
    .render(frame, status_area);
}

/// Page viewport height for a given frame size.
pub fn page_height(frame_area: Rect) -> u16 {
    layout(frame_area)[1].height
}

/// Map a click to a nav target. Only the nav row is clickable.
pub fn hit_test_nav(col: u16, row: u16, frame_area: Rect, monogram: &str) -> Option<SectionId> {
    let [title_area, _, _] = layout(frame_area);
    if row != title_area.y {
        return None;
    }
    nav_hit_test(col.saturating_sub(title_area.x), monogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::test_support::{buffer_text, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.status_message = "Theme: dark".to_string();
        let mut tui = TuiState::new(None);

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.starts_with(" MC   About  Expertise  Contact"));
        assert!(text.contains("Muralish Clinton"));
        assert!(text.contains("q quit"));
        assert!(text.contains("Theme: dark"));
        assert_eq!(tui.page.viewport_height, 27);
    }

    #[test]
    fn test_draw_ui_light_theme_paints_background() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.theme = Theme::Light;
        let mut tui = TuiState::new(None);

        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, Instant::now()))
            .unwrap();

        let palette = Palette::for_theme(Theme::Light);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, palette.bg);
        assert_eq!(buffer[(10, 10)].bg, palette.bg);
    }

    #[test]
    fn test_hit_test_nav() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(hit_test_nav(8, 0, area, "MC"), Some(SectionId::About));
        assert_eq!(hit_test_nav(8, 1, area, "MC"), None);
        assert_eq!(hit_test_nav(8, 10, area, "MC"), None);
        assert_eq!(page_height(area), 21);
    }
}
