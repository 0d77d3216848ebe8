//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something changed:
//!
//! - **Animating** (smooth scroll, counters): polls every ~16ms and redraws
//!   every pass.
//! - **Otherwise**: polls every 50ms and redraws on input, resize, or a new
//!   typing frame from the background task.
//!
//! The typing effect runs on a tokio task (see `core::typing`) and posts
//! `Action::TypingFrame` through a channel; the loop drains it each pass.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::prefs::{self, Prefs};
use crate::core::state::{App, SectionId};
use crate::core::typing::{TypingEffect, spawn_typing};
use crate::tui::components::PageState;
use crate::tui::components::page::WHEEL_STEP;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATING_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(50);

/// TUI-specific presentation state (not part of core page logic)
pub struct TuiState {
    pub page: PageState,
}

impl TuiState {
    pub fn new(start: Option<SectionId>) -> Self {
        Self {
            page: PageState::new(start),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// What the loop should do after handling one event.
enum Flow {
    Continue,
    Quit,
}

/// Apply an effect returned by `update()`.
fn apply_effect(effect: Effect, app: &App, tui: &mut TuiState) -> Flow {
    match effect {
        Effect::None => {}
        Effect::Quit => return Flow::Quit,
        Effect::SavePrefs => {
            let prefs = Prefs {
                theme: Some(app.theme),
            };
            if let Err(e) = prefs::save_prefs(&prefs) {
                warn!("Failed to save prefs: {}", e);
            }
        }
        Effect::ScrollTo(section) => tui.page.scroll_to_section(section, Instant::now()),
    }
    Flow::Continue
}

/// Route one input event to the reducer or the page.
fn handle_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    terminal: &mut DefaultTerminal,
) -> Flow {
    let action = match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ToggleTheme => Some(Action::ToggleTheme),
        TuiEvent::NextTab => Some(Action::NextTab),
        TuiEvent::PrevTab => Some(Action::PrevTab),
        TuiEvent::CycleFilter => Some(Action::CycleStoryFilter),
        TuiEvent::JumpTo(section) => Some(Action::NavigateTo(section)),
        TuiEvent::NextSection => tui.page.next_section().map(Action::NavigateTo),
        TuiEvent::PrevSection => tui.page.prev_section().map(Action::NavigateTo),
        TuiEvent::MouseClick(col, row) => {
            let frame_area = terminal.get_frame().area();
            ui::hit_test_nav(col, row, frame_area, &app.content.monogram())
                .map(Action::NavigateTo)
        }
        TuiEvent::ScrollUp => {
            tui.page.scroll_by(-i32::from(WHEEL_STEP));
            None
        }
        TuiEvent::ScrollDown => {
            tui.page.scroll_by(i32::from(WHEEL_STEP));
            None
        }
        TuiEvent::ScrollPageUp => {
            tui.page.scroll_by(-tui.page.page_step());
            None
        }
        TuiEvent::ScrollPageDown => {
            tui.page.scroll_by(tui.page.page_step());
            None
        }
        TuiEvent::ScrollToTop => {
            tui.page.scroll_to_top();
            None
        }
        TuiEvent::ScrollToBottom => {
            tui.page.scroll_to_bottom();
            None
        }
        // Resize just needs a redraw
        TuiEvent::Resize => None,
    };

    match action {
        Some(action) => {
            let effect = update(app, action);
            apply_effect(effect, app, tui)
        }
        None => Flow::Continue,
    }
}

/// Run the page until the user quits. Must be called inside a tokio runtime.
pub fn run(mut app: App, typing: TypingEffect, start: Option<SectionId>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for frames from the typing task
    let (tx, rx) = mpsc::channel();
    let typing_handle = spawn_typing(typing, move |text| {
        if tx.send(Action::TypingFrame(text)).is_err() {
            debug!("Typing frame dropped: receiver gone");
        }
    });

    let mut tui = TuiState::new(start);
    let result = event_loop(&mut terminal, &mut app, &mut tui, &rx);

    typing_handle.cancel();
    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Folio shut down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let animating = tui.page.is_animating(now, app.counter_duration);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout)?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = first_event;
        while let Some(event) = pending {
            if let Flow::Quit = handle_event(event, app, tui, terminal) {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }

        // Typing frames from the background task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(app, action);
            if let Flow::Quit = apply_effect(effect, app, tui) {
                return Ok(());
            }
        }
    }
}
