//! Word wrapping by display width.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wrap `text` into lines no wider than `width` columns.
///
/// Breaks at whitespace; a single word wider than `width` is split at
/// grapheme boundaries. Runs of whitespace collapse to one space. Always
/// returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if line_width > 0 && line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
            continue;
        }

        if line_width > 0 {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        // Hard-split an over-long word.
        for grapheme in word.graphemes(true) {
            let g_width = grapheme.width();
            if line_width + g_width > width && line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push_str(grapheme);
            line_width += g_width;
        }
    }

    if line_width > 0 || lines.is_empty() {
        lines.push(line);
    }
    lines
}
