//! Title Widget: renders a cycler's display text with a typewriter cursor.
//!
//! The widget never drives the cycler. It only mirrors the latest
//! [`CyclerFrame`] it was given, and a blink state from the ticker.

use super::traits::Widget;
use crate::actor::{CyclerFrame, Tick};
use crate::buffer::{Buffer, Modifiers, Rgb, Style};
use crate::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Horizontal placement of the text within the widget bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left.
    #[default]
    Left,
    /// Centered; the text grows from the middle as it is typed.
    Center,
}

/// Configuration for the title widget.
#[derive(Debug, Clone)]
pub struct TitleWidgetConfig {
    /// Text style.
    pub style: Style,
    /// Cursor style.
    pub cursor_style: Style,
    /// Cursor glyph.
    pub cursor: char,
    /// Whether to draw the cursor at all.
    pub show_cursor: bool,
    /// Horizontal alignment.
    pub align: Align,
}

impl Default for TitleWidgetConfig {
    fn default() -> Self {
        let bg = Rgb::from_u32(0x0F_17_2A);
        Self {
            style: Style::new(Rgb::from_u32(0xCB_D5_E1), bg).with_modifiers(Modifiers::BOLD),
            cursor_style: Style::new(Rgb::from_u32(0x0E_A5_E9), bg),
            cursor: '|',
            show_cursor: true,
            align: Align::Center,
        }
    }
}

/// Displays the rotating title.
#[derive(Debug)]
pub struct TitleWidget {
    /// Latest display text.
    text: String,
    /// Widget bounds.
    bounds: Rect,
    /// Blink state.
    cursor_on: bool,
    /// Configuration.
    config: TitleWidgetConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl TitleWidget {
    /// Create a new title widget with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, TitleWidgetConfig::default())
    }

    /// Create a new title widget with custom configuration.
    pub const fn with_config(bounds: Rect, config: TitleWidgetConfig) -> Self {
        Self {
            text: String::new(),
            bounds,
            cursor_on: true,
            config,
            dirty: true,
        }
    }

    /// Mirror a frame from the cycler. Returns `true` if the text changed.
    pub fn apply_frame(&mut self, frame: &CyclerFrame) -> bool {
        if self.text == frame.text {
            return false;
        }
        self.text.clone_from(&frame.text);
        // Typing keeps the cursor solid, like a real caret.
        self.cursor_on = true;
        self.dirty = true;
        true
    }

    /// Toggle the cursor on a blink tick.
    pub fn blink(&mut self, tick: &Tick) {
        if self.config.show_cursor && self.cursor_on != tick.is_on() {
            self.cursor_on = tick.is_on();
            self.dirty = true;
        }
    }

    /// The text currently shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the cursor is currently drawn.
    pub const fn cursor_visible(&self) -> bool {
        self.config.show_cursor && self.cursor_on
    }
}

impl Widget for TitleWidget {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    fn render(&self, buffer: &mut Buffer) {
        if !self.is_visible() {
            return;
        }
        let Rect { x, y, width, .. } = self.bounds;
        buffer.fill_rect(Rect::new(x, y, width, 1), self.config.style);

        // One column is reserved for the cursor.
        let text_room = if self.config.show_cursor { width.saturating_sub(1) } else { width };
        let text_width = u16::try_from(self.text.width()).unwrap_or(u16::MAX).min(text_room);
        let start = match self.config.align {
            Align::Left => x,
            Align::Center => {
                let used = text_width + u16::from(self.config.show_cursor);
                x + width.saturating_sub(used) / 2
            }
        };

        let used = buffer.set_str(start, y, &self.text, self.config.style, text_room);
        if self.cursor_visible() {
            let mut cursor = [0u8; 4];
            buffer.set_str(
                start + used,
                y,
                self.config.cursor.encode_utf8(&mut cursor),
                self.config.cursor_style,
                1,
            );
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
