//! # Footer Section
//!
//! A rule, then the owner's name on the left and role on the right.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::SectionProps;

pub fn lines(props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let content = &props.app.content;
    let width = usize::from(props.width);

    let used = content.name.width() + content.role.width();
    let gap = width.saturating_sub(used).max(3);

    vec![
        Line::from(Span::styled("─".repeat(width), p.border())),
        Line::from(vec![
            Span::styled(content.name.clone(), p.muted()),
            Span::styled(" ".repeat(gap), p.base()),
            Span::styled(content.role.clone(), p.muted()),
        ]),
    ]
}
