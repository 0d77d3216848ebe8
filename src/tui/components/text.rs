//! Line-building helpers shared by the page sections.
//!
//! Sections pre-wrap their text with `textwrap` so a section's height is
//! simply its line count, which the page layout needs before rendering.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Palette;

/// Greedy wrapping: fill each line before starting the next, split words
/// longer than the line.
fn wrap_options(width: usize) -> textwrap::Options<'static> {
    textwrap::Options::new(width)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
}

pub fn blank() -> Line<'static> {
    Line::default()
}

/// Wrap `text` to `width` columns, left-aligned.
pub fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|l| Line::from(Span::styled(l.into_owned(), style)))
        .collect()
}

/// Wrap `text` to `width` columns, each line centered.
pub fn wrapped_centered(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrapped(text, width, style)
        .into_iter()
        .map(Line::centered)
        .collect()
}

/// Wrap `text` behind a marker such as `"✓ "`, hanging-indenting the
/// continuation lines under the first character of the text.
pub fn bulleted(
    marker: &str,
    text: &str,
    width: u16,
    marker_style: Style,
    text_style: Style,
) -> Vec<Line<'static>> {
    let marker_width = marker.width();
    let avail = usize::from(width).saturating_sub(marker_width).max(1);
    let indent = " ".repeat(marker_width);

    textwrap::wrap(text, wrap_options(avail))
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            let lead = if i == 0 {
                Span::styled(marker.to_string(), marker_style)
            } else {
                Span::styled(indent.clone(), text_style)
            };
            Line::from(vec![lead, Span::styled(l.into_owned(), text_style)])
        })
        .collect()
}

/// Section opener: small uppercase eyebrow, bold title, optional blurb.
pub fn heading(
    eyebrow: &str,
    title: &str,
    blurb: Option<&str>,
    width: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(eyebrow.to_uppercase(), palette.primary())).centered(),
        Line::from(Span::styled(title.to_string(), palette.heading())).centered(),
    ];
    if let Some(blurb) = blurb {
        lines.push(blank());
        lines.extend(wrapped_centered(blurb, width, palette.muted()));
    }
    lines.push(blank());
    lines
}

/// Pieces joined with `sep`, wrapped as a unit so no piece is split.
pub fn joined_wrapped(
    pieces: &[String],
    sep: &str,
    width: u16,
    style: Style,
) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();
    for piece in pieces {
        let candidate_width = if current.is_empty() {
            piece.width()
        } else {
            current.width() + sep.width() + piece.width()
        };
        if !current.is_empty() && candidate_width > width {
            lines.push(Line::from(Span::styled(std::mem::take(&mut current), style)));
        }
        if !current.is_empty() {
            current.push_str(sep);
        }
        current.push_str(piece);
    }
    if !current.is_empty() {
        lines.push(Line::from(Span::styled(current, style)));
    }
    lines
}

/// Concatenated text of a line, for assertions.
#[cfg(test)]
pub fn plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use ratatui::layout::Alignment;

    #[test]
    fn test_wrapped_respects_width() {
        let lines = wrapped("one two three four five", 9, Style::default());
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| plain(l).width() <= 9));
    }

    #[test]
    fn test_wrapped_fills_lines_greedily() {
        let lines = wrapped("aaa bb cc dddddd", 9, Style::default());
        let texts: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(texts, ["aaa bb cc", "dddddd"]);
    }

    #[test]
    fn test_wrapped_breaks_long_words() {
        let lines = wrapped("abcdefghijkl", 5, Style::default());
        let texts: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(texts, ["abcde", "fghij", "kl"]);
    }

    #[test]
    fn test_bulleted_hangs_continuation_lines() {
        let lines = bulleted(
            "✓ ",
            "alpha beta gamma delta",
            12,
            Style::default(),
            Style::default(),
        );
        assert_eq!(plain(&lines[0]), "✓ alpha beta");
        assert!(plain(&lines[1]).starts_with("  gamma"));
    }

    #[test]
    fn test_heading_is_centered() {
        let palette = Palette::for_theme(Theme::Dark);
        let lines = heading("Connect", "Let's Work Together", None, 40, &palette);
        assert_eq!(plain(&lines[0]), "CONNECT");
        assert_eq!(lines[1].alignment, Some(Alignment::Center));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_joined_wrapped_keeps_pieces_whole() {
        let pieces: Vec<String> = ["Ruby on Rails", "Team Building", "CI/CD"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let lines = joined_wrapped(&pieces, " · ", 21, Style::default());
        let texts: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(texts, ["Ruby on Rails", "Team Building · CI/CD"]);
    }
}
