//! # Hero Section
//!
//! The first screen: role badge, name, tagline and the typing line.
//! Takes up most of the viewport and centers its content vertically.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::SectionProps;
use super::text::{blank, wrapped_centered};

/// Glyph drawn after the typed text.
pub const CURSOR: &str = "▌";

pub fn lines(props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let content = &props.app.content;

    let mut body = vec![
        Line::from(Span::styled(format!(" {} ", content.role), p.selected())).centered(),
        blank(),
        Line::from(Span::styled(
            content.name.clone(),
            p.heading().add_modifier(Modifier::UNDERLINED),
        ))
        .centered(),
        blank(),
    ];
    body.extend(wrapped_centered(&content.tagline, props.width, p.muted()));
    body.push(blank());
    body.push(typing_line(props));
    body.push(blank());
    body.push(
        Line::from(vec![
            Span::styled("[3] View My Expertise", p.primary()),
            Span::styled("   ", p.base()),
            Span::styled("[6] Get in Touch", p.muted()),
        ])
        .centered(),
    );
    body.push(blank());
    body.push(Line::from(Span::styled("↓", p.muted())).centered());

    // Fill ~90% of the viewport, content centered.
    let min_height = usize::from(props.viewport_height) * 9 / 10;
    if body.len() >= min_height {
        return body;
    }
    let pad = min_height - body.len();
    let top = pad / 2;
    let mut lines = vec![blank(); top];
    lines.extend(body);
    lines.extend(std::iter::repeat_n(blank(), pad - top));
    lines
}

fn typing_line(props: &SectionProps<'_>) -> Line<'static> {
    let p = props.palette;
    Line::from(vec![
        Span::styled("› ", p.muted()),
        Span::styled(props.app.typed_text.clone(), p.primary().add_modifier(Modifier::BOLD)),
        Span::styled(CURSOR, p.primary()),
    ])
    .centered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::test_support::test_app;
    use crate::tui::components::text::plain;
    use crate::tui::theme::Palette;

    fn props<'a>(
        app: &'a crate::core::state::App,
        palette: &'a Palette,
        vh: u16,
    ) -> SectionProps<'a> {
        SectionProps {
            app,
            palette,
            width: 60,
            viewport_height: vh,
            counter_elapsed: None,
        }
    }

    #[test]
    fn test_hero_shows_typed_text_with_cursor() {
        let mut app = test_app();
        app.typed_text = "platform eng".to_string();
        let palette = Palette::for_theme(Theme::Dark);
        let lines = lines(&props(&app, &palette, 10));
        assert!(
            lines
                .iter()
                .any(|l| plain(l) == format!("› platform eng{CURSOR}"))
        );
    }

    #[test]
    fn test_hero_fills_most_of_viewport() {
        let app = test_app();
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(lines(&props(&app, &palette, 40)).len(), 36);
    }

    #[test]
    fn test_hero_never_truncates_on_short_viewport() {
        let app = test_app();
        let palette = Palette::for_theme(Theme::Dark);
        let lines = lines(&props(&app, &palette, 4));
        assert!(lines.len() > 4);
        assert!(plain(&lines[2]).contains("Muralish Clinton"));
    }
}
