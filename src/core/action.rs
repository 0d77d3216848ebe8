//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User presses `t`? That's `Action::ToggleTheme`.
//! The typing task ticks? That's `Action::TypingFrame(text)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::{App, SectionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    TypingFrame(String),
    ToggleTheme,
    NextTab,
    PrevTab,
    CycleStoryFilter,
    NavigateTo(SectionId),
    Quit,
}

/// Work the caller must do after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SavePrefs,
    ScrollTo(SectionId),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if !matches!(action, Action::TypingFrame(_)) {
        debug!("update: {:?}", action);
    }
    match action {
        Action::TypingFrame(text) => {
            app.typed_text = text;
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            app.status_message = format!("Theme: {}", app.theme.label());
            Effect::SavePrefs
        }
        Action::NextTab => {
            let count = app.content.expertise.len();
            if count > 0 {
                app.expertise_tab = (app.expertise_tab + 1) % count;
            }
            Effect::None
        }
        Action::PrevTab => {
            let count = app.content.expertise.len();
            if count > 0 {
                app.expertise_tab = (app.expertise_tab + count - 1) % count;
            }
            Effect::None
        }
        Action::CycleStoryFilter => {
            app.story_filter = app.story_filter.next(app.content.expertise.len());
            app.status_message = format!("Stories: {}", app.story_filter_label());
            Effect::None
        }
        Action::NavigateTo(section) => Effect::ScrollTo(section),
        Action::Quit => Effect::Quit,
    }
}
