//! Buffer: A grid of cells representing the terminal screen.
//!
//! Cells are stored contiguously in row-major order.

use super::cell::{Cell, Style};
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;

/// A grid of cells representing the terminal screen.
///
/// Access is in row-major order: `index = y * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions, filled with blanks.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Convert (x, y) coordinates to a linear index.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y). Returns `false` if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Draw a string starting at (x, y), clipped to `max_width` columns and
    /// to the buffer edge.
    ///
    /// Wide graphemes that would straddle the clip edge are not drawn.
    /// Returns the number of columns used.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, style: Style, max_width: u16) -> u16 {
        if y >= self.height {
            return 0;
        }
        let limit = x.saturating_add(max_width).min(self.width);
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let cell = Cell::from_grapheme(grapheme).with_style(style);
            let width = u16::from(cell.width());
            if col + width > limit {
                break;
            }
            self.set(col, y, cell);
            if width == 2 {
                self.set(col + 1, y, Cell::wide_continuation(style));
            }
            col += width;
        }
        col - x
    }

    /// Fill a rectangular region with blanks in the given style.
    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        let blank = Cell::blank(style);
        for row in rect.y..rect.bottom().min(self.height) {
            for col in rect.x..rect.right().min(self.width) {
                self.set(col, row, blank.clone());
            }
        }
    }

    /// Fill the entire buffer with blanks in the given style.
    pub fn clear(&mut self, style: Style) {
        self.cells.fill(Cell::blank(style));
    }

    /// Resize the buffer, preserving content where possible.
    pub fn resize(&mut self, new_width: u16, new_height: u16) {
        if new_width == self.width && new_height == self.height {
            return;
        }

        let new_size = (new_width as usize) * (new_height as usize);
        let mut new_cells = vec![Cell::default(); new_size];

        let copy_width = self.width.min(new_width) as usize;
        let copy_height = self.height.min(new_height) as usize;
        for y in 0..copy_height {
            let old_start = y * (self.width as usize);
            let new_start = y * (new_width as usize);
            new_cells[new_start..new_start + copy_width]
                .clone_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Text content of a row, skipping wide continuations. Handy in tests.
    pub fn row_text(&self, y: u16) -> String {
        self.rows()
            .nth(y as usize)
            .map(|row| row.iter().map(Cell::symbol).collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_buffer_new() {
        let buffer = Buffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.area(), Rect::new(0, 0, 80, 24));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_buffer_zero_width() {
        let _ = Buffer::new(0, 24);
    }

    #[test]
    fn test_buffer_bounds() {
        let mut buffer = Buffer::new(80, 24);
        assert!(buffer.get(79, 23).is_some());
        assert!(buffer.get(80, 23).is_none());
        assert!(!buffer.set(0, 24, Cell::new('X')));
    }

    #[test]
    fn test_set_str_clips() {
        let mut buffer = Buffer::new(10, 1);
        let used = buffer.set_str(2, 0, "Engineer", Style::default(), 5);
        assert_eq!(used, 5);
        assert_eq!(buffer.row_text(0), "  Engin   ");

        let used = buffer.set_str(8, 0, "xyz", Style::default(), 10);
        assert_eq!(used, 2);
    }

    #[test]
    fn test_set_str_wide() {
        let mut buffer = Buffer::new(5, 1);
        let used = buffer.set_str(0, 0, "日本語", Style::default(), 5);
        // The third wide grapheme would straddle the edge.
        assert_eq!(used, 4);
        assert!(buffer.get(1, 0).unwrap().is_wide_continuation());
        assert_eq!(buffer.row_text(0), "日本 ");
    }

    #[test]
    fn test_fill_rect() {
        let mut buffer = Buffer::new(20, 5);
        let style = Style::new(Rgb::WHITE, Rgb::new(1, 2, 3));
        buffer.fill_rect(Rect::new(2, 1, 3, 2), style);

        assert_eq!(buffer.get(2, 1).unwrap().style().bg, Rgb::new(1, 2, 3));
        assert_eq!(buffer.get(4, 2).unwrap().style().bg, Rgb::new(1, 2, 3));
        assert_eq!(buffer.get(5, 1).unwrap().style(), Style::default());
    }

    #[test]
    fn test_buffer_resize() {
        let mut buffer = Buffer::new(80, 24);
        buffer.set(5, 5, Cell::new('X'));

        buffer.resize(100, 30);
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.get(5, 5).unwrap().symbol(), "X");

        buffer.resize(10, 10);
        assert_eq!(buffer.get(5, 5).unwrap().symbol(), "X");
        assert!(buffer.get(15, 15).is_none());
    }
}
