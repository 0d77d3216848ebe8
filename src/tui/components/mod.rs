//! # TUI Components
//!
//! All UI components for the terminal page.
//!
//! ## Component Architecture
//!
//! ### Chrome (fixed rows, `Component` trait)
//!
//! - `TitleBar`: monogram, nav items, theme and scroll progress
//! - `StatusBar`: key hints and the latest status message
//!
//! ### Page (scrolling, stateful)
//!
//! - `Page`: transient wrapper over `PageState`, lays out and renders every
//!   section into one scroll view
//!
//! ### Sections (line builders)
//!
//! Each section module exposes `lines(&SectionProps) -> Vec<Line>`. Sections
//! wrap their own text, so a section's height is its line count and the page
//! can compute scroll offsets before drawing anything.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (nav bar + progress)
//! ├── status_bar.rs    (bottom hints)
//! ├── page.rs          (scrollable page, smooth scroll)
//! ├── text.rs          (wrapping helpers)
//! └── hero.rs, about.rs, expertise.rs, stories.rs,
//!     approach.rs, contact.rs, footer.rs
//! ```

use std::time::Duration;

use ratatui::text::Line;

use crate::core::state::{App, SectionId};
use crate::tui::theme::Palette;

pub mod about;
pub mod approach;
pub mod contact;
pub mod expertise;
pub mod footer;
pub mod hero;
pub mod page;
pub mod status_bar;
pub mod stories;
pub mod text;
mod title_bar;

pub use page::{Page, PageState};
pub use status_bar::StatusBar;
pub use title_bar::{TitleBar, nav_hit_test};

/// Everything a section needs to build its lines.
pub struct SectionProps<'a> {
    pub app: &'a App,
    pub palette: &'a Palette,
    /// Column width available for text.
    pub width: u16,
    pub viewport_height: u16,
    /// Time since the counters started, `None` if they haven't.
    pub counter_elapsed: Option<Duration>,
}

pub fn section_lines(section: SectionId, props: &SectionProps<'_>) -> Vec<Line<'static>> {
    match section {
        SectionId::Hero => hero::lines(props),
        SectionId::About => about::lines(props),
        SectionId::Expertise => expertise::lines(props),
        SectionId::Stories => stories::lines(props),
        SectionId::Approach => approach::lines(props),
        SectionId::Contact => contact::lines(props),
        SectionId::Footer => footer::lines(props),
    }
}
