//! # About Section
//!
//! Background paragraphs, highlight cards and the count-up stats. The
//! counters sit at zero until the section first scrolls into view, then
//! climb to their targets over `App::counter_duration`.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::SectionProps;
use super::text::{blank, heading, wrapped};
use crate::core::counter::CountUp;

pub fn lines(props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let app = props.app;

    let mut lines = heading("Background", "About Me", None, props.width, p);

    for paragraph in &app.content.about {
        lines.extend(wrapped(paragraph, props.width, p.muted()));
        lines.push(blank());
    }

    if !app.content.highlights.is_empty() {
        let label_width = app
            .content
            .highlights
            .iter()
            .map(|h| h.label.len())
            .max()
            .unwrap_or(0);
        for h in &app.content.highlights {
            lines.push(Line::from(vec![
                Span::styled("■ ", p.primary()),
                Span::styled(format!("{:<label_width$}  ", h.label), p.muted()),
                Span::styled(h.value.clone(), p.heading()),
            ]));
        }
        lines.push(blank());
    }

    let stats = app.content.stats();
    let mut spans = Vec::new();
    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ", p.base()));
        }
        let value = match props.counter_elapsed {
            Some(elapsed) => CountUp::new(stat.target, app.counter_duration).value_at(elapsed),
            None => 0,
        };
        spans.push(Span::styled(
            value.to_string(),
            p.primary().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", stat.label), p.muted()));
    }
    lines.push(Line::from(spans).centered());
    lines.push(blank());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::test_support::test_app;
    use crate::tui::components::text::plain;
    use crate::tui::theme::Palette;
    use std::time::Duration;

    fn stats_line(elapsed: Option<Duration>) -> String {
        let app = test_app();
        let palette = Palette::for_theme(Theme::Dark);
        let props = SectionProps {
            app: &app,
            palette: &palette,
            width: 120,
            viewport_height: 30,
            counter_elapsed: elapsed,
        };
        let lines = lines(&props);
        plain(&lines[lines.len() - 2])
    }

    #[test]
    fn test_counters_idle_before_visible() {
        assert_eq!(
            stats_line(None),
            "0 Expertise Areas   0 Outcomes Delivered   0 Core Skills   0 Guiding Principles"
        );
    }

    #[test]
    fn test_counters_finish_at_targets() {
        assert_eq!(
            stats_line(Some(Duration::from_secs(10))),
            "3 Expertise Areas   12 Outcomes Delivered   18 Core Skills   4 Guiding Principles"
        );
    }

    #[test]
    fn test_highlights_are_aligned() {
        let app = test_app();
        let palette = Palette::for_theme(Theme::Light);
        let props = SectionProps {
            app: &app,
            palette: &palette,
            width: 80,
            viewport_height: 30,
            counter_elapsed: None,
        };
        let texts: Vec<String> = lines(&props).iter().map(plain).collect();
        assert!(texts.contains(&"■ Teams Built  Multiple".to_string()));
        assert!(texts.contains(&"■ Focus        0 to 1".to_string()));
    }
}
