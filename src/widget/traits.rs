//! The trait shared by everything the main loop places and draws.

use crate::actor::InputEvent;
use crate::buffer::Buffer;
use crate::layout::Rect;

/// A component with bounds, a dirty flag and a way to draw itself.
///
/// Widgets are positioned by the page: when their row scrolls off screen
/// they receive empty bounds and draw nothing.
pub trait Widget {
    /// Where the widget draws.
    fn bounds(&self) -> Rect;

    /// Move or resize the widget. Implementations mark themselves dirty
    /// when the bounds actually change.
    fn set_bounds(&mut self, bounds: Rect);

    /// Draw into `buffer`, touching only cells inside [`bounds`](Self::bounds).
    fn render(&self, buffer: &mut Buffer);

    /// Offer an input event. Returns `true` if it was consumed.
    ///
    /// Display-only widgets keep the default, which consumes nothing.
    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
    }

    /// Whether anything changed since the last [`clear_redraw`](Self::clear_redraw).
    fn needs_redraw(&self) -> bool;

    /// Called by the main loop after the widget has been drawn.
    fn clear_redraw(&mut self);

    /// Whether the widget currently occupies any cells.
    fn is_visible(&self) -> bool {
        !self.bounds().is_empty()
    }
}
