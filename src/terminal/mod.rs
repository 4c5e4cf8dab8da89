//! Terminal ownership and frame presentation.

mod screen;

pub use screen::{Compositor, Screen, ScreenConfig};
