//! The title cycler state machine.
//!
//! This is a pure state machine with no clock. Each state has a *dwell*,
//! the time to wait before its outgoing transition, and [`TitleCycler::advance`]
//! performs exactly one transition. Scheduling is left to the caller (see
//! [`CyclerActor`](crate::actor::CyclerActor)).
//!
//! ```text
//!            type_delay                      hold(i)
//! Typing(i,p) ────────▶ Typing(i,p+1) ─ … ─▶ Holding(i) ───────▶ Erasing(i,len)
//!                                                                      │ erase_delay
//!   Typing(i+1 mod n, 0) ◀──────────────── Erasing(i,1) ◀─ … ◀──────────┘
//! ```

use super::config::CyclerConfig;
use super::title::{Title, TitleList};
use crate::error::ConfigError;
use std::time::Duration;

/// Sub-state of displaying a single title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Characters are being appended.
    Typing,
    /// The full title is shown unchanged.
    Holding,
    /// Characters are being removed from the end.
    Erasing,
}

/// Runtime state of a cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CyclerState {
    /// Index of the current title.
    pub index: usize,
    /// Number of graphemes currently displayed.
    pub prefix_len: usize,
    /// Current phase.
    pub phase: Phase,
}

impl CyclerState {
    /// The state every cycler starts in: `Typing(0, 0)`.
    pub const INITIAL: Self = Self::typing(0, 0);

    /// `Typing(index, prefix_len)`.
    pub const fn typing(index: usize, prefix_len: usize) -> Self {
        Self { index, prefix_len, phase: Phase::Typing }
    }

    /// `Holding(index)`; `len` is the full title length.
    pub const fn holding(index: usize, len: usize) -> Self {
        Self { index, prefix_len: len, phase: Phase::Holding }
    }

    /// `Erasing(index, prefix_len)`.
    pub const fn erasing(index: usize, prefix_len: usize) -> Self {
        Self { index, prefix_len, phase: Phase::Erasing }
    }
}

/// Types, holds, erases and advances through a list of titles.
#[derive(Debug, Clone)]
pub struct TitleCycler {
    titles: TitleList,
    config: CyclerConfig,
    state: CyclerState,
    /// Parked on the last title of a non-looping cycler.
    settled: bool,
}

impl TitleCycler {
    /// Create a cycler in its initial state.
    ///
    /// # Errors
    ///
    /// Returns an error if the hold policy does not fit the title list.
    pub fn new(titles: TitleList, config: CyclerConfig) -> Result<Self, ConfigError> {
        config.validate(titles.len())?;
        Ok(Self {
            titles,
            config,
            state: CyclerState::INITIAL,
            settled: false,
        })
    }

    /// Convenience constructor from raw strings and a uniform timing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTitles`] for an empty list.
    pub fn from_titles<I, T>(titles: I, char_delay: Duration, hold: Duration) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Title>,
    {
        Self::new(TitleList::new(titles)?, CyclerConfig::new(char_delay, hold))
    }

    /// The titles being cycled.
    pub const fn titles(&self) -> &TitleList {
        &self.titles
    }

    /// The timing configuration.
    pub const fn config(&self) -> &CyclerConfig {
        &self.config
    }

    /// The current state.
    pub const fn state(&self) -> CyclerState {
        self.state
    }

    /// The title currently being displayed.
    pub fn current_title(&self) -> &Title {
        self.titles.get(self.state.index)
    }

    /// The text to render right now.
    pub fn display(&self) -> &str {
        self.current_title().prefix(self.state.prefix_len)
    }

    /// Whether a non-looping cycler has parked on its last title.
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Time to wait in the current state before calling [`advance`](Self::advance).
    ///
    /// Returns `None` once settled. Empty titles give a zero dwell on
    /// entering and leaving, never on `Holding`.
    pub fn dwell(&self) -> Option<Duration> {
        if self.settled {
            return None;
        }
        let title_len = self.current_title().len();
        Some(match self.state.phase {
            Phase::Typing if title_len == 0 => Duration::ZERO,
            Phase::Typing => self.config.type_delay,
            Phase::Holding => self.config.hold.for_index(self.state.index),
            Phase::Erasing if self.state.prefix_len == 0 => Duration::ZERO,
            Phase::Erasing => self.config.erase_delay,
        })
    }

    /// Perform one transition and return the new state.
    ///
    /// Returns `None` without changing anything once settled.
    pub fn advance(&mut self) -> Option<CyclerState> {
        if self.settled {
            return None;
        }
        let CyclerState { index, prefix_len, phase } = self.state;
        let title_len = self.current_title().len();

        self.state = match phase {
            Phase::Typing if prefix_len + 1 < title_len => CyclerState::typing(index, prefix_len + 1),
            Phase::Typing => CyclerState::holding(index, title_len),
            Phase::Holding => CyclerState::erasing(index, title_len),
            Phase::Erasing if prefix_len > 1 => CyclerState::erasing(index, prefix_len - 1),
            Phase::Erasing => CyclerState::typing(self.titles.next_index(index), 0),
        };

        if self.state.phase == Phase::Holding
            && !self.config.looping
            && self.state.index + 1 == self.titles.len()
        {
            self.settled = true;
        }

        Some(self.state)
    }

    /// Restart from `Typing(0, 0)`.
    pub const fn reset(&mut self) {
        self.state = CyclerState::INITIAL;
        self.settled = false;
    }

    /// Replay this cycler on a virtual clock.
    ///
    /// The first entry is the current state at offset zero; each following
    /// entry is one transition later. The iterator ends only when a
    /// non-looping cycler settles.
    pub fn timeline(&self) -> Timeline {
        Timeline {
            cycler: self.clone(),
            at: Duration::ZERO,
            started: false,
        }
    }
}

/// One sampled point of a [`Timeline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Offset from the start of the timeline.
    pub at: Duration,
    /// State entered at `at`.
    pub state: CyclerState,
    /// Display text at `at`.
    pub text: String,
}

/// Iterator over the transitions of a cycler on a virtual clock.
#[derive(Debug, Clone)]
pub struct Timeline {
    cycler: TitleCycler,
    at: Duration,
    started: bool,
}

impl Timeline {
    fn entry(&self) -> TimelineEntry {
        TimelineEntry {
            at: self.at,
            state: self.cycler.state(),
            text: self.cycler.display().to_string(),
        }
    }
}

impl Iterator for Timeline {
    type Item = TimelineEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.entry());
        }
        let dwell = self.cycler.dwell()?;
        self.cycler.advance()?;
        self.at += dwell;
        Some(self.entry())
    }
}
