//! # Stories Section
//!
//! Every outcome across the expertise areas, filterable by area with `f`.

use ratatui::text::{Line, Span};

use super::SectionProps;
use super::text::{blank, bulleted, heading};
use crate::core::state::StoryFilter;

pub fn lines(props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let app = props.app;

    let mut lines = heading("Impact", "Stories", None, props.width, p);

    // Filter chips: All + one per area number.
    let mut chips = vec![("All".to_string(), StoryFilter::All)];
    chips.extend(
        app.content
            .expertise
            .iter()
            .enumerate()
            .map(|(i, a)| (a.number.clone(), StoryFilter::Area(i))),
    );
    let mut spans = vec![Span::styled("filter ", p.muted())];
    for (label, filter) in chips {
        let style = if filter == app.story_filter {
            p.selected()
        } else {
            p.muted()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::styled(" ", p.base()));
    }
    spans.push(Span::styled("(f)", p.muted()));
    lines.push(Line::from(spans).centered());
    lines.push(blank());

    let stories = app.visible_stories();
    if stories.is_empty() {
        lines.push(Line::from(Span::styled("Nothing here yet.", p.muted())).centered());
        lines.push(blank());
        return lines;
    }

    let mut last_area = None;
    for story in stories {
        if last_area != Some(story.area_index) {
            if last_area.is_some() {
                lines.push(blank());
            }
            lines.push(Line::from(Span::styled(
                story.area_title.to_string(),
                p.heading(),
            )));
            last_area = Some(story.area_index);
        }
        lines.extend(bulleted("✓ ", story.text, props.width, p.accent(), p.muted()));
    }
    lines.push(blank());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::state::App;
    use crate::test_support::test_app;
    use crate::tui::components::text::plain;
    use crate::tui::theme::Palette;

    fn texts(app: &App) -> Vec<String> {
        let palette = Palette::for_theme(Theme::Dark);
        let props = SectionProps {
            app,
            palette: &palette,
            width: 120,
            viewport_height: 30,
            counter_elapsed: None,
        };
        lines(&props).iter().map(plain).collect()
    }

    #[test]
    fn test_all_filter_groups_by_area() {
        let texts = texts(&test_app());
        let headings: Vec<&String> = texts
            .iter()
            .filter(|t| t.starts_with("Building") || t.starts_with("Improving"))
            .collect();
        assert_eq!(headings.len(), 3);
        assert_eq!(texts.iter().filter(|t| t.starts_with("✓ ")).count(), 12);
    }

    #[test]
    fn test_area_filter_narrows_stories() {
        let mut app = test_app();
        app.story_filter = StoryFilter::Area(0);
        let texts = texts(&app);
        assert_eq!(texts.iter().filter(|t| t.starts_with("✓ ")).count(), 4);
        assert!(texts.contains(&"Building a Ruby on Rails Team".to_string()));
        assert!(!texts.iter().any(|t| t.contains("Launched an internal platform")));
    }

    #[test]
    fn test_chip_line_lists_areas() {
        let texts = texts(&test_app());
        assert_eq!(texts[3], "filter  All   01   02   03  (f)");
    }

    #[test]
    fn test_empty_content_says_so() {
        let mut app = test_app();
        app.content.expertise.clear();
        assert!(texts(&app).contains(&"Nothing here yet.".to_string()));
    }
}
