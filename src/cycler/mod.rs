//! Title Cycler: the typewriter-style rotating title.
//!
//! Given an ordered list of titles, a cycler types each one out a character
//! at a time, holds it, erases it, and moves on to the next, forever.
//!
//! # Layers
//!
//! - [`TitleList`] / [`Title`]: validated, grapheme-indexed input
//! - [`CyclerConfig`]: per-character delays and hold durations
//! - [`TitleCycler`]: the pure state machine (no clock, no threads)
//!
//! Real-time scheduling lives in [`CyclerActor`](crate::actor::CyclerActor).
//!
//! # Example
//!
//! ```rust
//! use folio::cycler::TitleCycler;
//! use std::time::Duration;
//!
//! let mut cycler = TitleCycler::from_titles(
//!     ["Engineer", "Speaker"],
//!     Duration::from_millis(50),
//!     Duration::from_millis(2000),
//! )?;
//!
//! assert_eq!(cycler.display(), "");
//! cycler.advance();
//! assert_eq!(cycler.display(), "E");
//! # Ok::<(), folio::ConfigError>(())
//! ```

mod config;
mod machine;
mod title;

pub use config::{CyclerConfig, HoldPolicy, DEFAULT_HOLD, DEFAULT_TYPE_DELAY};
pub use machine::{CyclerState, Phase, Timeline, TimelineEntry, TitleCycler};
pub use title::{Title, TitleList};
