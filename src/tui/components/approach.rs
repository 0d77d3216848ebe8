//! # Approach Section
//!
//! Numbered leadership principles.

use ratatui::text::{Line, Span};

use super::SectionProps;
use super::text::{blank, heading, wrapped};

pub fn lines(props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let mut lines = heading(
        "Philosophy",
        "My Leadership Approach",
        Some("Principles that guide how I build teams, design systems, and drive results."),
        props.width,
        p,
    );

    let body_width = props.width.saturating_sub(4);
    for (i, principle) in props.app.content.principles.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:02}  ", i + 1), p.muted()),
            Span::styled(principle.title.clone(), p.heading()),
        ]));
        for line in wrapped(&principle.description, body_width, p.muted()) {
            let mut spans = vec![Span::styled("    ", p.base())];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
        lines.push(blank());
    }
    lines
}
