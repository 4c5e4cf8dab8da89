//! Diffing Engine: Generate minimal terminal output from buffer changes.
//!
//! 1. Compare the current and next buffers cell by cell
//! 2. Emit commands only for cells that changed
//! 3. Skip cursor moves when the cursor is already in place
//! 4. Track style state to avoid redundant SGR sequences
//!
//! Output is queued into a byte buffer so the caller can flush it with one
//! write.

use super::{Buffer, Cell, Modifiers, Style};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use std::io::{self, Write};

/// Tracks what the terminal currently has, so redundant sequences are skipped.
#[derive(Debug, Clone, Default)]
pub struct DiffState {
    /// Last known cursor position, if known.
    cursor: Option<(u16, u16)>,
    /// Last emitted style.
    style: Option<Style>,
}

impl DiffState {
    /// Create a state with nothing known about the terminal.
    pub const fn new() -> Self {
        Self {
            cursor: None,
            style: None,
        }
    }

    /// Forget everything (e.g., after a full clear or raw output).
    pub const fn reset(&mut self) {
        self.cursor = None;
        self.style = None;
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells written.
    pub cells_changed: usize,
    /// Number of cursor moves emitted.
    pub cursor_moves: usize,
    /// Number of style changes emitted.
    pub style_changes: usize,
}

/// Write every changed cell of `next` relative to `current` into `out`.
///
/// The buffers must have the same dimensions.
pub fn render_diff<W: Write>(
    current: &Buffer,
    next: &Buffer,
    out: &mut W,
    state: &mut DiffState,
) -> io::Result<DiffResult> {
    debug_assert_eq!(current.area(), next.area());
    let mut result = DiffResult::default();

    for (y, (old_row, new_row)) in current.rows().zip(next.rows()).enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = y as u16;
        for (x, (old, new)) in old_row.iter().zip(new_row).enumerate() {
            if old == new || new.is_wide_continuation() {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let x = x as u16;
            write_cell(out, x, y, new, state, &mut result)?;
        }
    }

    Ok(result)
}

/// Write every cell of `buffer` into `out`, ignoring what is on screen.
pub fn render_full<W: Write>(buffer: &Buffer, out: &mut W, state: &mut DiffState) -> io::Result<DiffResult> {
    state.reset();
    let mut result = DiffResult::default();
    for (y, row) in buffer.rows().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = y as u16;
        for (x, cell) in row.iter().enumerate() {
            if cell.is_wide_continuation() {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let x = x as u16;
            write_cell(out, x, y, cell, state, &mut result)?;
        }
    }
    Ok(result)
}

fn write_cell<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    cell: &Cell,
    state: &mut DiffState,
    result: &mut DiffResult,
) -> io::Result<()> {
    if state.cursor != Some((x, y)) {
        queue!(out, MoveTo(x, y))?;
        result.cursor_moves += 1;
    }

    let style = cell.style();
    if state.style != Some(style) {
        apply_style(out, style, state.style)?;
        state.style = Some(style);
        result.style_changes += 1;
    }

    queue!(out, Print(cell.symbol()))?;
    state.cursor = Some((x + u16::from(cell.width()), y));
    result.cells_changed += 1;
    Ok(())
}

fn apply_style<W: Write>(out: &mut W, style: Style, previous: Option<Style>) -> io::Result<()> {
    // Attributes can only be cleared all at once, which also drops colors.
    let reset = previous.map_or(true, |prev| prev.modifiers != style.modifiers);
    if reset {
        queue!(out, SetAttribute(Attribute::Reset))?;
        for (flag, attribute) in [
            (Modifiers::BOLD, Attribute::Bold),
            (Modifiers::DIM, Attribute::Dim),
            (Modifiers::ITALIC, Attribute::Italic),
            (Modifiers::UNDERLINE, Attribute::Underlined),
            (Modifiers::REVERSED, Attribute::Reverse),
        ] {
            if style.modifiers.contains(flag) {
                queue!(out, SetAttribute(attribute))?;
            }
        }
    }
    if reset || previous.is_some_and(|prev| prev.fg != style.fg) {
        queue!(out, SetForegroundColor(style.fg.into()))?;
    }
    if reset || previous.is_some_and(|prev| prev.bg != style.bg) {
        queue!(out, SetBackgroundColor(style.bg.into()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_identical_buffers_emit_nothing() {
        let a = Buffer::new(40, 10);
        let b = a.clone();
        let mut out: Vec<u8> = Vec::new();
        let result = render_diff(&a, &b, &mut out, &mut DiffState::new()).unwrap();
        assert_eq!(result, DiffResult::default());
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_change() {
        let a = Buffer::new(40, 10);
        let mut b = a.clone();
        b.set(3, 2, Cell::new('Z'));

        let mut out: Vec<u8> = Vec::new();
        let result = render_diff(&a, &b, &mut out, &mut DiffState::new()).unwrap();
        assert_eq!(result.cells_changed, 1);
        assert_eq!(result.cursor_moves, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[3;4H"));
        assert!(text.ends_with('Z'));
    }

    #[test]
    fn test_adjacent_cells_share_cursor_move() {
        let a = Buffer::new(40, 10);
        let mut b = a.clone();
        b.set_str(5, 5, "abc", Style::default(), 40);

        let mut out: Vec<u8> = Vec::new();
        let result = render_diff(&a, &b, &mut out, &mut DiffState::new()).unwrap();
        assert_eq!(result.cells_changed, 3);
        assert_eq!(result.cursor_moves, 1);
    }

    #[test]
    fn test_style_tracked_across_cells() {
        let a = Buffer::new(10, 1);
        let mut b = a.clone();
        let style = Style::new(Rgb::new(14, 165, 233), Rgb::BLACK).with_modifiers(Modifiers::BOLD);
        b.set_str(0, 0, "hey", style, 10);

        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut Vec::<u8>::new(), &mut state).unwrap();
        assert_eq!(result.style_changes, 1);

        // Same style again: no new SGR.
        let mut c = b.clone();
        c.set_str(5, 0, "you", style, 10);
        let result = render_diff(&b, &c, &mut Vec::<u8>::new(), &mut state).unwrap();
        assert_eq!(result.style_changes, 0);
    }

    #[test]
    fn test_render_full_covers_every_cell() {
        let buffer = Buffer::new(8, 3);
        let mut out: Vec<u8> = Vec::new();
        let result = render_full(&buffer, &mut out, &mut DiffState::new()).unwrap();
        assert_eq!(result.cells_changed, 24);
        assert_eq!(result.cursor_moves, 3);
    }
}
