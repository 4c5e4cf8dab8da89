//! # Folio
//!
//! A terminal rendition of a single-page portfolio, built around a
//! typewriter-style title cycler.
//!
//! ## Core Concepts
//!
//! - **Title cycler**: a pure state machine that types, holds and erases a
//!   list of titles, one grapheme at a time
//! - **Actor model**: the cycler, the cursor blink and terminal input each
//!   run on their own thread and talk to the main loop over channels
//! - **Double-buffered rendering**: the page is drawn into a buffer and only
//!   the cells that changed reach the terminal
//!
//! ## Example
//!
//! ```rust
//! use folio::cycler::TitleCycler;
//! use std::time::Duration;
//!
//! let mut cycler = TitleCycler::from_titles(
//!     ["Engineer", "Speaker"],
//!     Duration::from_millis(50),
//!     Duration::from_millis(2000),
//! )
//! .unwrap();
//!
//! assert_eq!(cycler.display(), "");
//! cycler.advance();
//! assert_eq!(cycler.display(), "E");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod buffer;
pub mod config;
pub mod cycler;
pub mod error;
pub mod layout;
pub mod logging;
pub mod portfolio;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{CyclerActor, CyclerFrame, InputEvent, KeyCode, KeyModifiers};
pub use buffer::{Buffer, Cell, Modifiers, Rgb, Style};
pub use cycler::{CyclerConfig, CyclerState, HoldPolicy, Phase, Title, TitleCycler, TitleList};
pub use error::{ConfigError, FolioError};
pub use layout::Rect;
pub use portfolio::{Page, Portfolio, Section};
pub use widget::{TitleWidget, Widget};
