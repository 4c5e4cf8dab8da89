//! Screen: terminal ownership plus double-buffered presentation.
//!
//! [`Compositor`] holds the current/next buffer pair and turns their
//! difference into one write. [`Screen`] wraps it with the terminal modes
//! (raw mode, alternate screen, hidden cursor) and restores them on drop.

use crate::buffer::diff::{render_diff, render_full, DiffResult, DiffState};
use crate::buffer::Buffer;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Terminal modes to enable while the screen is alive.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Report mouse wheel events.
    pub enable_mouse: bool,
    /// Draw on the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            enable_mouse: true,
            alternate_screen: true,
        }
    }
}

/// Current/next buffer pair with diff-based presentation.
#[derive(Debug)]
pub struct Compositor {
    /// What the terminal shows.
    current: Buffer,
    /// What the next frame should show.
    next: Buffer,
    /// Cursor and style known to be on the terminal.
    state: DiffState,
    /// Reused output bytes.
    scratch: Vec<u8>,
    /// Repaint everything on the next present.
    full_redraw: bool,
    /// Frames presented so far.
    frame_count: u64,
}

impl Compositor {
    /// Create a compositor for a `width` x `height` terminal.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            current: Buffer::new(width, height),
            next: Buffer::new(width, height),
            state: DiffState::new(),
            scratch: Vec::with_capacity(16 * 1024),
            full_redraw: true,
            frame_count: 0,
        }
    }

    /// Width in columns.
    pub const fn width(&self) -> u16 {
        self.next.width()
    }

    /// Height in rows.
    pub const fn height(&self) -> u16 {
        self.next.height()
    }

    /// The buffer to draw the next frame into.
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.next
    }

    /// Frames presented so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Adapt to a new terminal size. The next present repaints everything.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }
        self.current.resize(width, height);
        self.next.resize(width, height);
        self.full_redraw = true;
    }

    /// Write the pending frame to `out` in a single write.
    ///
    /// # Errors
    ///
    /// Returns any error from writing or flushing `out`.
    pub fn present<W: Write>(&mut self, out: &mut W) -> io::Result<DiffResult> {
        self.scratch.clear();
        let result = if self.full_redraw {
            queue!(self.scratch, Clear(ClearType::All))?;
            render_full(&self.next, &mut self.scratch, &mut self.state)?
        } else {
            render_diff(&self.current, &self.next, &mut self.scratch, &mut self.state)?
        };

        if !self.scratch.is_empty() {
            out.write_all(&self.scratch)?;
            out.flush()?;
        }

        self.current.clone_from(&self.next);
        self.full_redraw = false;
        self.frame_count += 1;
        Ok(result)
    }
}

/// Owns the terminal for the lifetime of the interactive page.
pub struct Screen {
    config: ScreenConfig,
    compositor: Compositor,
}

impl Screen {
    /// Enter raw mode and set up the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be read or a mode cannot
    /// be enabled. Modes already enabled are restored before returning.
    pub fn enter(config: ScreenConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        // From here on, Drop restores whatever was enabled.
        let screen = Self {
            config,
            compositor: Compositor::new(width.max(1), height.max(1)),
        };

        let mut stdout = io::stdout();
        if screen.config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if screen.config.enable_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        execute!(stdout, cursor::Hide)?;

        tracing::debug!(width, height, "terminal entered");
        Ok(screen)
    }

    /// Width in columns.
    pub const fn width(&self) -> u16 {
        self.compositor.width()
    }

    /// Height in rows.
    pub const fn height(&self) -> u16 {
        self.compositor.height()
    }

    /// The buffer to draw the next frame into.
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        self.compositor.buffer_mut()
    }

    /// Adapt to a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "terminal resized");
        self.compositor.resize(width, height);
    }

    /// Present the pending frame on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn present(&mut self) -> io::Result<DiffResult> {
        let mut stdout = io::stdout().lock();
        let result = self.compositor.present(&mut stdout)?;
        tracing::trace!(
            frame = self.compositor.frame_count(),
            cells = result.cells_changed,
            "presented"
        );
        Ok(result)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, crossterm::style::ResetColor, cursor::Show);
        if self.config.enable_mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Cell, Style};

    #[test]
    fn test_first_present_is_full() {
        let mut compositor = Compositor::new(10, 2);
        let mut out: Vec<u8> = Vec::new();
        let result = compositor.present(&mut out).unwrap();
        assert_eq!(result.cells_changed, 20);
        assert!(String::from_utf8(out).unwrap().contains("\x1b[2J"));
    }

    #[test]
    fn test_unchanged_frame_writes_nothing() {
        let mut compositor = Compositor::new(10, 2);
        compositor.present(&mut Vec::<u8>::new()).unwrap();

        let mut out: Vec<u8> = Vec::new();
        let result = compositor.present(&mut out).unwrap();
        assert_eq!(result, DiffResult::default());
        assert!(out.is_empty());
        assert_eq!(compositor.frame_count(), 2);
    }

    #[test]
    fn test_only_changes_are_written() {
        let mut compositor = Compositor::new(10, 2);
        compositor.present(&mut Vec::<u8>::new()).unwrap();

        compositor.buffer_mut().set_str(0, 1, "hi", Style::default(), 10);
        let result = compositor.present(&mut Vec::<u8>::new()).unwrap();
        assert_eq!(result.cells_changed, 2);

        // Next frame keeps the text: nothing to do.
        let result = compositor.present(&mut Vec::<u8>::new()).unwrap();
        assert_eq!(result.cells_changed, 0);
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let mut compositor = Compositor::new(10, 2);
        compositor.present(&mut Vec::<u8>::new()).unwrap();

        compositor.resize(4, 3);
        assert_eq!((compositor.width(), compositor.height()), (4, 3));
        compositor.buffer_mut().set(0, 0, Cell::new('x'));
        let result = compositor.present(&mut Vec::<u8>::new()).unwrap();
        assert_eq!(result.cells_changed, 12);

        // Zero sizes are ignored.
        compositor.resize(0, 5);
        assert_eq!(compositor.width(), 4);
    }
}
