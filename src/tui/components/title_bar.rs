//! # TitleBar Component
//!
//! Fixed nav bar at the top of the page.
//!
//! ```text
//!  MC   About  Expertise  Contact                      ◐ dark   42%
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━───────────────────────────────────────
//! ```
//!
//! Row one: monogram (jumps home), nav items (the one whose section is on
//! screen is highlighted), theme and scroll percentage. Row two: the scroll
//! progress bar.
//!
//! Stateless: all data arrives as props. Mouse hit testing uses the same
//! column math as rendering via [`nav_items`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::Theme;
use crate::core::state::SectionId;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const LEFT_PAD: u16 = 1;
const ITEM_GAP: u16 = 2;

pub struct TitleBar {
    pub monogram: String,
    pub active: SectionId,
    pub theme: Theme,
    /// Scroll progress, 0..=100.
    pub progress: u16,
    pub palette: Palette,
}

/// Clickable spans of the nav row as `(section, start_col, end_col)`,
/// end exclusive. The monogram is the first entry and maps to the hero.
pub fn nav_items(monogram: &str) -> Vec<(SectionId, u16, u16)> {
    let mut items = Vec::new();
    let mut x = LEFT_PAD;
    let w = monogram.width() as u16;
    items.push((SectionId::Hero, x, x + w));
    x += w + ITEM_GAP + 1;
    for section in SectionId::NAV {
        let w = section.label().width() as u16;
        items.push((section, x, x + w));
        x += w + ITEM_GAP;
    }
    items
}

/// Which nav target, if any, is at column `col` of the nav row.
pub fn nav_hit_test(col: u16, monogram: &str) -> Option<SectionId> {
    nav_items(monogram)
        .into_iter()
        .find(|(_, start, end)| col >= *start && col < *end)
        .map(|(section, _, _)| section)
}

impl TitleBar {
    fn nav_line(&self) -> Line<'static> {
        let p = &self.palette;
        let mut spans = Vec::new();
        let mut x = 0u16;
        for (section, start, end) in nav_items(&self.monogram) {
            if start > x {
                spans.push(Span::styled(" ".repeat(usize::from(start - x)), p.base()));
            }
            let (text, style) = if section == SectionId::Hero {
                (self.monogram.clone(), p.heading())
            } else if section == self.active {
                (section.label().to_string(), p.primary().add_modifier(Modifier::BOLD))
            } else {
                (section.label().to_string(), p.muted())
            };
            spans.push(Span::styled(text, style));
            x = end;
        }
        Line::from(spans)
    }

    fn progress_line(&self, width: u16) -> Line<'static> {
        let p = &self.palette;
        let width = usize::from(width);
        let filled = width * usize::from(self.progress.min(100)) / 100;
        Line::from(vec![
            Span::styled("━".repeat(filled), p.primary()),
            Span::styled("─".repeat(width - filled), p.border()),
        ])
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let [nav_row, bar_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let glyph = match self.theme {
            Theme::Dark => "◐",
            Theme::Light => "◑",
        };
        let right = Line::from(vec![
            Span::styled(format!("{glyph} {}", self.theme.label()), p.muted()),
            Span::styled(format!("  {:>3}% ", self.progress.min(100)), p.primary()),
        ]);
        let [left_area, right_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(right.width() as u16),
        ])
        .areas(nav_row);

        frame.render_widget(Paragraph::new(self.nav_line()).style(p.base()), left_area);
        frame.render_widget(Paragraph::new(right).style(p.base()), right_area);

        frame.render_widget(
            Paragraph::new(self.progress_line(bar_row.width)).style(p.base()),
            bar_row,
        );
    }
}
