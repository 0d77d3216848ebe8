//! # Contact Section

use ratatui::text::{Line, Span};

use super::SectionProps;
use super::text::{blank, heading};

pub fn lines(props: &SectionProps<'_>) -> Vec<Line<'static>> {
    let p = props.palette;
    let contact = &props.app.content.contact;

    let mut lines = heading(
        "Connect",
        &contact.headline,
        Some(&contact.blurb).filter(|b| !b.is_empty()).map(String::as_str),
        props.width,
        p,
    );

    let links = [
        ("✉ Email", contact.email.as_ref().map(|e| format!("mailto:{e}"))),
        ("in LinkedIn", contact.linkedin.clone()),
        ("⌥ GitHub", contact.github.clone()),
    ];
    for (label, target) in links {
        if let Some(target) = target {
            lines.push(
                Line::from(vec![
                    Span::styled(format!("{label:<12}"), p.heading()),
                    Span::styled(target, p.primary()),
                ])
                .centered(),
            );
        }
    }
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

    #[test]
    fn test_links_skip_missing_entries() {
        let mut app = test_app();
        app.content.contact.linkedin = None;
        let palette = Palette::for_theme(Theme::Dark);
        let props = SectionProps {
            app: &app,
            palette: &palette,
            width: 80,
            viewport_height: 30,
            counter_elapsed: None,
        };
        let texts: Vec<String> = lines(&props).iter().map(plain).collect();
        assert_eq!(texts[1], "Let's Work Together");
        assert!(texts.iter().any(|t| t.ends_with("mailto:muralish.clinton@example.com")));
        assert!(texts.iter().any(|t| t.ends_with("https://github.com")));
        assert!(!texts.iter().any(|t| t.contains("LinkedIn")));
    }
}
