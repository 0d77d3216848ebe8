//! # Typing Effect
//!
//! A timer-driven state machine that types a phrase one character at a time,
//! holds it, deletes it, then moves on to the next phrase. Forever.
//!
//! ```text
//!            full phrase             pause elapsed
//!   Typing ───────────────▶ Paused ───────────────▶ Deleting
//!     ▲                                                 │
//!     └──────────── text empty, index = (i+1) mod N ────┘
//! ```
//!
//! The machine itself is pure: [`TypingEffect::tick`] performs one transition
//! and says how long to wait before the next one. Scheduling lives in
//! [`TypingEffect::into_stream`] (one `tokio::time::sleep` at a time) and
//! [`spawn_typing`], which runs the stream on a task and hands each frame to
//! the host until the returned [`TypingHandle`] is cancelled or dropped.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures::{Stream, StreamExt};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    /// Empty phrase list, empty phrase, or a zero interval.
    InvalidConfiguration(String),
}

impl fmt::Display for TypingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypingError::InvalidConfiguration(msg) => {
                write!(f, "invalid typing configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for TypingError {}

/// Timing for one effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    pub typing_interval: Duration,
    pub deleting_interval: Duration,
    pub pause: Duration,
}

impl TypingConfig {
    pub fn from_millis(typing_ms: u64, deleting_ms: u64, pause_ms: u64) -> Self {
        Self {
            typing_interval: Duration::from_millis(typing_ms),
            deleting_interval: Duration::from_millis(deleting_ms),
            pause: Duration::from_millis(pause_ms),
        }
    }

    fn validate(&self) -> Result<(), TypingError> {
        let checks = [
            ("typing interval", self.typing_interval),
            ("deleting interval", self.deleting_interval),
            ("pause", self.pause),
        ];
        for (name, value) in checks {
            if value.is_zero() {
                return Err(TypingError::InvalidConfiguration(format!(
                    "{name} must be positive"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    /// Holding the fully typed phrase.
    Paused,
    Deleting,
}

/// Snapshot of the machine between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectState {
    /// Always a prefix of `phrases[active_index]`.
    pub current_text: String,
    pub active_index: usize,
    pub mode: Mode,
}

/// Result of a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// The string to display now.
    pub text: String,
    /// How long to wait before the next tick.
    pub next_delay: Duration,
}

/// A validated, cyclic phrase list plus its current state.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<String>,
    config: TypingConfig,
    state: EffectState,
    /// Characters of `current_text`, so we never re-count on every tick.
    typed: usize,
}

impl TypingEffect {
    pub fn new(phrases: Vec<String>, config: TypingConfig) -> Result<Self, TypingError> {
        if phrases.is_empty() {
            return Err(TypingError::InvalidConfiguration(
                "phrase list is empty".to_string(),
            ));
        }
        if let Some(pos) = phrases.iter().position(|p| p.is_empty()) {
            return Err(TypingError::InvalidConfiguration(format!(
                "phrase {pos} is empty"
            )));
        }
        config.validate()?;

        Ok(Self {
            phrases,
            config,
            state: EffectState {
                current_text: String::new(),
                active_index: 0,
                mode: Mode::Typing,
            },
            typed: 0,
        })
    }

    pub fn state(&self) -> &EffectState {
        &self.state
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Delay before the very first emission.
    pub fn first_delay(&self) -> Duration {
        self.config.typing_interval
    }

    fn active_phrase(&self) -> &str {
        &self.phrases[self.state.active_index]
    }

    fn set_prefix(&mut self, chars: usize) {
        let phrase = &self.phrases[self.state.active_index];
        let end = phrase
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        self.state.current_text = phrase[..end].to_string();
        self.typed = chars;
    }

    fn delete_one(&mut self) -> Duration {
        self.set_prefix(self.typed.saturating_sub(1));
        if self.typed == 0 {
            self.state.active_index = (self.state.active_index + 1) % self.phrases.len();
            self.state.mode = Mode::Typing;
            self.config.typing_interval
        } else {
            self.state.mode = Mode::Deleting;
            self.config.deleting_interval
        }
    }

    /// Advance the machine by exactly one transition.
    pub fn tick(&mut self) -> Tick {
        let next_delay = match self.state.mode {
            Mode::Typing => {
                self.set_prefix(self.typed + 1);
                if self.typed == self.active_phrase().chars().count() {
                    self.state.mode = Mode::Paused;
                    self.config.pause
                } else {
                    self.config.typing_interval
                }
            }
            Mode::Paused | Mode::Deleting => self.delete_one(),
        };

        Tick {
            text: self.state.current_text.clone(),
            next_delay,
        }
    }

    /// Turn the effect into an infinite stream of display strings.
    ///
    /// Each item is produced after sleeping for the delay chosen by the
    /// previous tick, so there is never more than one timer outstanding.
    /// Dropping the stream cancels it.
    pub fn into_stream(self) -> impl Stream<Item = String> + Send + 'static {
        let delay = self.first_delay();
        futures::stream::unfold((self, delay), |(mut effect, delay)| async move {
            tokio::time::sleep(delay).await;
            let tick = effect.tick();
            Some((tick.text, (effect, tick.next_delay)))
        })
    }
}

/// Owner of a running typing task. Cancels on drop.
pub struct TypingHandle {
    live: Arc<AtomicBool>,
    abort: tokio::task::AbortHandle,
}

impl TypingHandle {
    /// Stop the effect. No frame is delivered after this returns.
    pub fn cancel(&self) {
        if self.live.swap(false, Ordering::SeqCst) {
            info!("Typing effect cancelled");
        }
        self.abort.abort();
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `effect` on a tokio task, calling `on_frame` with every display string.
///
/// Must be called from inside a tokio runtime.
pub fn spawn_typing<F>(effect: TypingEffect, mut on_frame: F) -> TypingHandle
where
    F: FnMut(String) + Send + 'static,
{
    info!(
        "Starting typing effect with {} phrase(s)",
        effect.phrases().len()
    );
    let live = Arc::new(AtomicBool::new(true));
    let task_live = live.clone();

    let task = tokio::spawn(async move {
        let mut frames = std::pin::pin!(effect.into_stream());
        while let Some(text) = frames.next().await {
            // A sleep that completed right as cancel() ran must not emit.
            if !task_live.load(Ordering::SeqCst) {
                debug!("Typing task observed cancellation, exiting");
                return;
            }
            on_frame(text);
        }
    });

    TypingHandle {
        live,
        abort: task.abort_handle(),
    }
}
