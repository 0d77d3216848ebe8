//! # Page Component
//!
//! The scrolling body: every section stacked in one `ScrollView`.
//!
//! ## Architecture
//!
//! `Page` is a transient component (created each frame) that wraps
//! `&'a mut PageState` (persistent state) and the `App` (props). Rendering
//! builds each section's lines, records their heights in the layout cache,
//! then advances any smooth scroll and clamps the offset against the new
//! layout before drawing.
//!
//! ## Scrolling
//!
//! - Direct scrolling (keys, wheel) moves the offset immediately and cancels
//!   any smooth scroll in flight.
//! - Section jumps ease toward the section's top over [`SMOOTH_SCROLL`].
//! - A jump requested before the first layout (`--section`) is applied
//!   without animation once heights are known.

use std::time::{Duration, Instant};

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::{SectionProps, section_lines};
use crate::core::state::{App, SectionId};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const SMOOTH_SCROLL: Duration = Duration::from_millis(300);
/// Text column never grows wider than this, however wide the terminal.
pub const MAX_COLUMN_WIDTH: u16 = 96;
pub const WHEEL_STEP: u16 = 3;

/// An eased scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    pub from: u16,
    pub to: u16,
    pub started: Instant,
    pub duration: Duration,
}

impl SmoothScroll {
    pub fn offset_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * eased).round() as u16
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Cached section geometry from the last render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Top offset of each section, indexed like `SectionId::ALL`.
    pub offsets: Vec<u16>,
    pub heights: Vec<u16>,
}

impl PageLayout {
    pub fn from_heights(heights: Vec<u16>) -> Self {
        let mut offsets = Vec::with_capacity(heights.len());
        let mut y: u16 = 0;
        for h in &heights {
            offsets.push(y);
            y = y.saturating_add(*h);
        }
        Self { offsets, heights }
    }

    pub fn total(&self) -> u16 {
        self.heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h))
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn offset_of(&self, section: SectionId) -> u16 {
        self.offsets.get(section.index()).copied().unwrap_or(0)
    }

    /// Section containing content row `y`.
    pub fn section_at(&self, y: u16) -> SectionId {
        let idx = self
            .offsets
            .iter()
            .rposition(|&top| top <= y)
            .unwrap_or(0);
        SectionId::ALL[idx.min(SectionId::ALL.len() - 1)]
    }
}

/// Scroll and animation state for the page.
/// Must be persisted in the parent TuiState.
pub struct PageState {
    pub scroll_state: ScrollViewState,
    pub layout: PageLayout,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    pub smooth_scroll: Option<SmoothScroll>,
    /// Jump to apply once the first layout exists.
    pub pending_target: Option<SectionId>,
    /// When the About section first became visible.
    pub counters_started: Option<Instant>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PageState {
    pub fn new(start: Option<SectionId>) -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: PageLayout::default(),
            viewport_height: 0,
            smooth_scroll: None,
            pending_target: start,
            counters_started: None,
        }
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    pub fn max_offset(&self) -> u16 {
        self.layout.total().saturating_sub(self.viewport_height)
    }

    /// Set the offset, clamped to the content bounds.
    pub fn set_offset(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    pub fn clamp_scroll(&mut self) {
        self.set_offset(self.offset());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.smooth_scroll = None;
        let target = (i32::from(self.offset()) + delta).clamp(0, i32::from(u16::MAX));
        self.set_offset(target as u16);
    }

    pub fn page_step(&self) -> i32 {
        i32::from(self.viewport_height.saturating_sub(2).max(1))
    }

    pub fn scroll_to_top(&mut self) {
        self.smooth_scroll = None;
        self.set_offset(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.smooth_scroll = None;
        self.set_offset(self.max_offset());
    }

    /// Ease toward the top of `section`.
    pub fn scroll_to_section(&mut self, section: SectionId, now: Instant) {
        if self.layout.is_empty() {
            self.pending_target = Some(section);
            return;
        }
        let from = self.offset();
        let to = self.layout.offset_of(section).min(self.max_offset());
        debug!("Smooth scroll to {:?}: {} -> {}", section, from, to);
        self.smooth_scroll = (from != to).then_some(SmoothScroll {
            from,
            to,
            started: now,
            duration: SMOOTH_SCROLL,
        });
    }

    /// Step the smooth scroll, if any, to `now`.
    pub fn advance(&mut self, now: Instant) {
        if let Some(scroll) = self.smooth_scroll {
            self.set_offset(scroll.offset_at(now));
            if scroll.is_done(now) {
                self.smooth_scroll = None;
            }
        }
    }

    /// Install a fresh layout and resolve any pending jump.
    pub fn apply_layout(&mut self, layout: PageLayout, viewport_height: u16) {
        self.layout = layout;
        self.viewport_height = viewport_height;
        if let Some(section) = self.pending_target.take() {
            let y = self.layout.offset_of(section);
            self.set_offset(y);
        }
        self.clamp_scroll();
    }

    /// Scroll progress, 0..=100. A page that fits on screen is fully read.
    pub fn progress(&self) -> u16 {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        (u32::from(self.offset()) * 100 / u32::from(max)) as u16
    }

    /// The section the reader is looking at: the one under the top third of
    /// the viewport, or the last content section once scrolled to the end.
    pub fn current_section(&self) -> SectionId {
        if self.layout.is_empty() {
            return SectionId::Hero;
        }
        let max = self.max_offset();
        if max > 0 && self.offset() >= max {
            let bottom = self.offset().saturating_add(self.viewport_height.saturating_sub(1));
            return match self.layout.section_at(bottom) {
                SectionId::Footer => SectionId::Contact,
                other => other,
            };
        }
        self.layout
            .section_at(self.offset().saturating_add(self.viewport_height / 3))
    }

    pub fn next_section(&self) -> Option<SectionId> {
        let y = self.offset();
        let max = self.max_offset();
        SectionId::ALL
            .into_iter()
            .filter(|s| *s != SectionId::Footer)
            .find(|s| {
                let top = self.layout.offset_of(*s);
                top > y && top <= max
            })
    }

    pub fn prev_section(&self) -> Option<SectionId> {
        let y = self.offset();
        SectionId::ALL
            .into_iter()
            .rev()
            .find(|s| self.layout.offset_of(*s) < y)
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        let idx = section.index();
        let (Some(&top), Some(&height)) =
            (self.layout.offsets.get(idx), self.layout.heights.get(idx))
        else {
            return false;
        };
        let view_top = self.offset();
        let view_bottom = view_top.saturating_add(self.viewport_height);
        height > 0 && top < view_bottom && top.saturating_add(height) > view_top
    }

    /// Start the counters the first time the About section is on screen.
    pub fn note_visibility(&mut self, now: Instant) {
        if self.counters_started.is_none() && self.is_visible(SectionId::About) {
            info!("About section visible, starting counters");
            self.counters_started = Some(now);
        }
    }

    pub fn counter_elapsed(&self, now: Instant) -> Option<Duration> {
        self.counters_started
            .map(|started| now.saturating_duration_since(started))
    }

    /// True while something on the page moves without input.
    pub fn is_animating(&self, now: Instant, counter_duration: Duration) -> bool {
        let counting = self
            .counter_elapsed(now)
            .is_some_and(|elapsed| elapsed < counter_duration);
        self.smooth_scroll.is_some() || counting
    }
}

/// Scrollable page component.
/// Created fresh each frame with references to state and data.
pub struct Page<'a> {
    pub state: &'a mut PageState,
    pub app: &'a App,
    pub palette: Palette,
    pub now: Instant,
}

impl<'a> Page<'a> {
    pub fn new(state: &'a mut PageState, app: &'a App, palette: Palette, now: Instant) -> Self {
        Self {
            state,
            app,
            palette,
            now,
        }
    }
}

impl<'a> Component for Page<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let column = content_width.min(MAX_COLUMN_WIDTH);
        let column_x = (content_width - column) / 2 + 1;
        let text_width = column.saturating_sub(2).max(1);

        // 1. Build every section against the current width.
        let props = SectionProps {
            app: self.app,
            palette: &self.palette,
            width: text_width,
            viewport_height: area.height,
            counter_elapsed: self.state.counter_elapsed(self.now),
        };
        let sections: Vec<_> = SectionId::ALL
            .into_iter()
            .map(|id| section_lines(id, &props))
            .collect();

        // 2. Update layout cache, then scroll against it.
        let heights = sections
            .iter()
            .map(|lines| u16::try_from(lines.len()).unwrap_or(u16::MAX))
            .collect();
        self.state
            .apply_layout(PageLayout::from_heights(heights), area.height);
        self.state.advance(self.now);
        self.state.note_visibility(self.now);

        // 3. Render
        let total = self.state.layout.total().max(area.height);
        let mut scroll_view = ScrollView::new(Size::new(content_width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Block::new().style(self.palette.base()),
            Rect::new(0, 0, content_width, total),
        );

        for (lines, (&top, &height)) in sections.into_iter().zip(
            self.state
                .layout
                .offsets
                .iter()
                .zip(self.state.layout.heights.iter()),
        ) {
            let rect = Rect::new(column_x, top, text_width, height);
            scroll_view.render_widget(Paragraph::new(lines).style(self.palette.base()), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
