//! # Expertise Section
//!
//! One card per expertise area, shown one at a time behind a tab strip.
//! `App::expertise_tab` picks the card; the tab strip falls back to bare
//! numbers when the titles don't fit on one line.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::SectionProps;
use super::text::{blank, bulleted, heading, joined_wrapped, wrapped};
use crate::core::content::ExpertiseArea;

pub fn lines(props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let areas = &props.app.content.expertise;

    let mut lines = heading(
        "Value Addition",
        "Areas of Expertise",
        Some(
            "Deep experience across critical dimensions of engineering leadership, \
             each grounded in hands-on execution and strategic thinking.",
        ),
        props.width,
        p,
    );

    if areas.is_empty() {
        return lines;
    }
    let selected = props.app.expertise_tab.min(areas.len() - 1);

    lines.push(tab_strip(areas, selected, props));
    lines.push(Line::from(Span::styled(
        "─".repeat(usize::from(props.width)),
        p.border(),
    )));
    lines.push(blank());
    lines.extend(card(&areas[selected], props));
    lines.push(Line::from(Span::styled("tab / ← → switch area", p.muted())).centered());
    lines.push(blank());
    lines
}

fn tab_strip(areas: &[ExpertiseArea], selected: usize, props: &SectionProps<'_>) -> Line<'static> {
    let p = props.palette;
    let full: Vec<String> = areas
        .iter()
        .map(|a| format!(" {} {} ", a.number, a.title))
        .collect();
    let full_width: usize = full.iter().map(|t| t.width() + 1).sum();
    let labels = if full_width <= usize::from(props.width) {
        full
    } else {
        areas.iter().map(|a| format!(" {} ", a.number)).collect()
    };

    let mut spans = Vec::new();
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", p.base()));
        }
        let style = if i == selected { p.selected() } else { p.muted() };
        spans.push(Span::styled(label, style));
    }
    Line::from(spans).centered()
}

fn card(area: &ExpertiseArea, props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let width = props.width;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}  ", area.number), p.muted()),
            Span::styled(area.title.clone(), p.heading()),
        ]),
        Line::from(Span::styled(
            area.subtitle.clone(),
            p.muted().add_modifier(Modifier::ITALIC),
        )),
        blank(),
    ];
    lines.extend(wrapped(&area.description, width, p.muted()));
    lines.push(blank());

    if !area.focus_areas.is_empty() {
        lines.push(Line::from(Span::styled("Key Focus Areas", p.heading())));
        for item in &area.focus_areas {
            lines.extend(bulleted("› ", item, width, p.primary(), p.muted()));
        }
        lines.push(blank());
    }

    if !area.outcomes.is_empty() {
        lines.push(Line::from(Span::styled("Outcomes Delivered", p.heading())));
        for item in &area.outcomes {
            lines.extend(bulleted("✓ ", item, width, p.accent(), p.muted()));
        }
        lines.push(blank());
    }

    if !area.skills.is_empty() {
        let badges: Vec<String> = area.skills.iter().map(|s| format!("[{s}]")).collect();
        lines.extend(joined_wrapped(&badges, " ", width, p.primary()));
        lines.push(blank());
    }
    lines
}
