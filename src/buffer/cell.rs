//! Cell: The atomic unit of terminal display.
//!
//! A cell holds one grapheme cluster plus its style. Wide graphemes (CJK,
//! most emoji) occupy two columns: the first cell holds the grapheme and the
//! second is a zero-width continuation marker.

use bitflags::bitflags;
use unicode_width::UnicodeWidthStr;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., `0x0EA5E9`).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// ```
    /// use folio::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::UNDERLINE;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Foreground, background and modifiers, applied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Create a style with no modifiers.
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Add modifiers (builder pattern).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::WHITE, Rgb::BLACK)
    }
}

/// A single terminal cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Grapheme cluster; empty for a wide-character continuation.
    symbol: String,
    /// Display width (0 = continuation, 1 = normal, 2 = wide).
    width: u8,
    /// Colors and modifiers.
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::default())
    }
}

impl Cell {
    /// A space in the given style.
    pub fn blank(style: Style) -> Self {
        Self {
            symbol: " ".to_string(),
            width: 1,
            style,
        }
    }

    /// Create a cell from a single character.
    pub fn new(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self::from_grapheme(c.encode_utf8(&mut buf))
    }

    /// Create a cell from a grapheme cluster.
    ///
    /// Control characters and other zero-width input render as a space so
    /// every non-continuation cell advances the cursor by its width.
    pub fn from_grapheme(grapheme: &str) -> Self {
        let width = grapheme.width().min(2);
        if width == 0 || grapheme.chars().any(char::is_control) {
            return Self::default();
        }
        Self {
            symbol: grapheme.to_string(),
            width: u8::try_from(width).unwrap_or(1),
            style: Style::default(),
        }
    }

    /// The cell following a wide grapheme.
    pub fn wide_continuation(style: Style) -> Self {
        Self {
            symbol: String::new(),
            width: 0,
            style,
        }
    }

    /// The grapheme in this cell.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display width (0, 1, or 2).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Whether this is the second half of a wide grapheme.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.width == 0
    }

    /// The cell's style.
    #[inline]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Set the style (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.style.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.style.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.style.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("width", &self.width)
            .field("style", &self.style)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0x0E_A5_E9.into();
        assert_eq!(rgb, Rgb::new(0x0E, 0xA5, 0xE9));
        assert_eq!(format!("{rgb:?}"), "#0ea5e9");
    }

    #[test]
    fn test_cell_new_ascii() {
        let cell = Cell::new('A');
        assert_eq!(cell.symbol(), "A");
        assert_eq!(cell.width(), 1);
    }

    #[test]
    fn test_cell_wide_grapheme() {
        let cell = Cell::from_grapheme("日");
        assert_eq!(cell.width(), 2);
        assert!(Cell::wide_continuation(Style::default()).is_wide_continuation());
    }

    #[test]
    fn test_control_char_becomes_blank() {
        let cell = Cell::new('\u{7}');
        assert_eq!(cell.symbol(), " ");
        assert_eq!(cell.width(), 1);
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::new('X')
            .with_fg(Rgb::new(255, 0, 0))
            .with_bg(Rgb::new(0, 0, 255))
            .with_modifiers(Modifiers::BOLD | Modifiers::ITALIC);

        assert_eq!(cell.style().fg, Rgb::new(255, 0, 0));
        assert_eq!(cell.style().bg, Rgb::new(0, 0, 255));
        assert!(cell.style().modifiers.contains(Modifiers::BOLD));
        assert_ne!(cell, Cell::new('X'));
    }
}
