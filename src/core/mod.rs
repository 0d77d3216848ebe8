//! # Core Application Logic
//!
//! This module contains Folio's page logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (page data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • TypingEffect         │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and section identifiers
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`typing`]: The typing-effect state machine and its timer driver
//! - [`counter`]: Count-up stat animation
//! - [`content`]: Portfolio text
//! - [`config`]: Settings resolution
//! - [`prefs`]: Remembered UI preferences

pub mod action;
pub mod config;
pub mod content;
pub mod counter;
pub mod prefs;
pub mod state;
pub mod typing;
