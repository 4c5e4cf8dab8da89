//! Widgets: components that draw into a [`Buffer`](crate::buffer::Buffer).
//!
//! The page itself is static text; the only live component is the
//! [`TitleWidget`], which mirrors frames published by the cycler actor.

mod title;
mod traits;

pub use title::{Align, TitleWidget, TitleWidgetConfig};
pub use traits::Widget;
