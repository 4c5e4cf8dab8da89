//! Buffer module: Data structures for double-buffered rendering.
//!
//! - [`Cell`]: one grapheme and its style
//! - [`Buffer`]: a grid of cells representing the screen
//! - [`Rgb`], [`Style`], [`Modifiers`]: styling
//! - [`diff`]: minimal redraw between two buffers

#[allow(clippy::module_inception)]
mod buffer;
mod cell;
pub mod diff;

pub use buffer::Buffer;
pub use cell::{Cell, Modifiers, Rgb, Style};
