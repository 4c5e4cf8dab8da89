//! Layout module: rectangles and text wrapping.
//!
//! Layout is computed once per terminal size. There is no tree traversal at
//! render time.

mod rect;
mod wrap;

pub use rect::Rect;
pub use wrap::wrap;
