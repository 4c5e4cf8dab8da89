//! Actor Model: Message-passing concurrency for the page.
//!
//! Each actor owns one thread and talks to the main loop over crossbeam
//! channels:
//! - **Cycler Actor**: drives the title cycler, publishes display frames
//! - **Ticker Actor**: blink ticks for the typewriter cursor
//! - **Input Actor**: polls terminal events
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    CyclerFrame      ┌──────────────┐
//! │Cycler Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐       Tick          │  Main Loop   │ ──▶ Screen
//! │Ticker Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐     InputEvent      │              │
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     └──────────────┘
//! ```
//!
//! Dropping an actor tears its thread down.

mod cycler;
mod input;
mod messages;
mod ticker;

pub use cycler::CyclerActor;
pub use input::InputActor;
pub use messages::{CyclerFrame, InputEvent, KeyCode, KeyModifiers};
pub use ticker::{Tick, TickerActor};
