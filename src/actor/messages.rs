//! Message types for actor communication.
//!
//! These define the protocol between the actor threads and the main loop.

use crate::cycler::{CyclerState, Phase};

/// Key codes for keyboard input.
///
/// A subset of crossterm's `KeyCode`, covering what a read-only page needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Control only.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Mouse wheel scrolled (positive = up).
    Scroll(i16),

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

impl InputEvent {
    /// Shorthand for an unmodified key press.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Published by a [`CyclerActor`](super::CyclerActor) after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclerFrame {
    /// State the cycler just entered.
    pub state: CyclerState,
    /// Display text for that state.
    pub text: String,
    /// Transition count since mount (0 for the initial frame).
    pub sequence: u64,
    /// The cycler will publish nothing further.
    pub settled: bool,
}

impl CyclerFrame {
    /// Phase of the published state.
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }
}
