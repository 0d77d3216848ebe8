//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::Theme;
use crate::core::content::Portfolio;
use crate::core::state::App;

/// Creates a test App with the built-in content and the dark theme.
pub fn test_app() -> App {
    App::new(Portfolio::default(), Theme::Dark)
}

/// Flatten a rendered buffer into one string (row-major, no separators).
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
