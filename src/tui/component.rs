use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold a mutable
/// borrow of persistent state, and render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component can update layout caches or
/// scroll state during the render pass, like ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
