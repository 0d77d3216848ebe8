//! # Application State
//!
//! Core page state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state (scroll offsets, animation
//! clocks) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── content: Portfolio          // what the page says
//! ├── theme: Theme                // dark / light
//! ├── typed_text: String          // latest typing-effect frame
//! ├── expertise_tab: usize        // selected expertise area
//! ├── story_filter: StoryFilter   // stories shown
//! ├── status_message: String      // status bar text
//! └── counter_duration: Duration  // count-up animation length
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::Theme;
use crate::core::config::DEFAULT_COUNTER_DURATION_MS;
use crate::core::content::{Portfolio, Story};

/// The page's sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Expertise,
    Stories,
    Approach,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Expertise,
        SectionId::Stories,
        SectionId::Approach,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Sections listed in the nav bar.
    pub const NAV: [SectionId; 3] = [SectionId::About, SectionId::Expertise, SectionId::Contact];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Expertise => "Expertise",
            SectionId::Stories => "Stories",
            SectionId::Approach => "Approach",
            SectionId::Contact => "Contact",
            SectionId::Footer => "Footer",
        }
    }

    /// Parse a section name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| {
            s.label().to_ascii_lowercase() == name || (name == "hero" && *s == SectionId::Hero)
        })
    }

    /// Jump target for the digit keys `1`..`6`.
    pub fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            1..=6 => Some(Self::ALL[(digit - 1) as usize]),
            _ => None,
        }
    }
}

/// Which stories are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryFilter {
    #[default]
    All,
    Area(usize),
}

impl StoryFilter {
    /// All → Area(0) → … → Area(n-1) → All.
    pub fn next(self, area_count: usize) -> Self {
        match self {
            _ if area_count == 0 => StoryFilter::All,
            StoryFilter::All => StoryFilter::Area(0),
            StoryFilter::Area(i) if i + 1 < area_count => StoryFilter::Area(i + 1),
            StoryFilter::Area(_) => StoryFilter::All,
        }
    }

    pub fn matches(self, story: &Story<'_>) -> bool {
        match self {
            StoryFilter::All => true,
            StoryFilter::Area(i) => story.area_index == i,
        }
    }
}

pub struct App {
    pub content: Portfolio,
    pub theme: Theme,
    pub typed_text: String,
    pub expertise_tab: usize,
    pub story_filter: StoryFilter,
    pub status_message: String,
    pub counter_duration: Duration,
}

impl App {
    pub fn new(content: Portfolio, theme: Theme) -> Self {
        Self {
            content,
            theme,
            typed_text: String::new(),
            expertise_tab: 0,
            story_filter: StoryFilter::default(),
            status_message: String::new(),
            counter_duration: Duration::from_millis(DEFAULT_COUNTER_DURATION_MS),
        }
    }

    pub fn visible_stories(&self) -> Vec<Story<'_>> {
        let filter = self.story_filter;
        self.content
            .stories()
            .into_iter()
            .filter(|s| filter.matches(s))
            .collect()
    }

    pub fn story_filter_label(&self) -> &str {
        match self.story_filter {
            StoryFilter::All => "All",
            StoryFilter::Area(i) => self
                .content
                .expertise
                .get(i)
                .map(|a| a.title.as_str())
                .unwrap_or("All"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.expertise_tab, 0);
        assert_eq!(app.story_filter, StoryFilter::All);
        assert!(app.typed_text.is_empty());
    }

    #[test]
    fn test_story_filter_cycles() {
        let mut f = StoryFilter::All;
        let mut seen = Vec::new();
        for _ in 0..5 {
            f = f.next(3);
            seen.push(f);
        }
        assert_eq!(
            seen,
            [
                StoryFilter::Area(0),
                StoryFilter::Area(1),
                StoryFilter::Area(2),
                StoryFilter::All,
                StoryFilter::Area(0)
            ]
        );
        assert_eq!(StoryFilter::Area(1).next(0), StoryFilter::All);
    }

    #[test]
    fn test_visible_stories_respects_filter() {
        let mut app = test_app();
        assert_eq!(app.visible_stories().len(), 12);
        app.story_filter = StoryFilter::Area(2);
        let stories = app.visible_stories();
        assert_eq!(stories.len(), 4);
        assert!(stories.iter().all(|s| s.area_index == 2));
        assert_eq!(app.story_filter_label(), "Improving Developer Efficiency");
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(SectionId::from_name("Expertise"), Some(SectionId::Expertise));
        assert_eq!(SectionId::from_name("hero"), Some(SectionId::Hero));
        assert_eq!(SectionId::from_name("home"), Some(SectionId::Hero));
        assert_eq!(SectionId::from_name("blog"), None);
        assert_eq!(SectionId::from_digit(6), Some(SectionId::Contact));
        assert_eq!(SectionId::from_digit(7), None);
        assert_eq!(SectionId::Stories.index(), 3);
    }
}
