//! Titles: the strings a cycler rotates through.
//!
//! A [`Title`] pre-computes its grapheme boundaries once, so taking a prefix
//! of `n` characters is a slice operation and never splits a combining
//! sequence or an emoji cluster.

use crate::error::ConfigError;
use unicode_segmentation::UnicodeSegmentation;

/// A single display string in the rotation.
#[derive(Clone, PartialEq, Eq)]
pub struct Title {
    /// The full text.
    text: String,
    /// Byte offset of the end of each grapheme cluster.
    ends: Vec<usize>,
}

impl Title {
    /// Create a title from any string. Empty strings are allowed.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Self { text, ends }
    }

    /// The full text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in grapheme clusters.
    #[inline]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Whether the title is the empty string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The first `n` graphemes. `n` is clamped to the title length.
    pub fn prefix(&self, n: usize) -> &str {
        match n.min(self.ends.len()) {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }
}

impl std::fmt::Debug for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Title({:?})", self.text)
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// An ordered, non-empty list of titles.
///
/// Immutable once built; the order is the cycle order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleList {
    titles: Vec<Title>,
}

impl TitleList {
    /// Build a title list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTitles`] if `titles` yields nothing.
    pub fn new<I, T>(titles: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Title>,
    {
        let titles: Vec<Title> = titles.into_iter().map(Into::into).collect();
        if titles.is_empty() {
            return Err(ConfigError::EmptyTitles);
        }
        Ok(Self { titles })
    }

    /// Parse a `|`-separated title string such as
    /// `"Data Scientist | ML Engineer | Speaker"`.
    ///
    /// Each piece is trimmed. Splitting always yields at least one piece, so
    /// an empty input becomes a single empty title.
    pub fn parse_separated(source: &str) -> Self {
        Self {
            titles: source.split('|').map(|t| Title::new(t.trim())).collect(),
        }
    }

    /// Number of titles (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Title at `index`, wrapping modulo the list length.
    #[inline]
    pub fn get(&self, index: usize) -> &Title {
        &self.titles[index % self.titles.len()]
    }

    /// Index following `index` in cycle order.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.titles.len()
    }

    /// Iterate over the titles in cycle order.
    pub fn iter(&self) -> std::slice::Iter<'_, Title> {
        self.titles.iter()
    }
}

impl<'a> IntoIterator for &'a TitleList {
    type Item = &'a Title;
    type IntoIter = std::slice::Iter<'a, Title>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_prefix_ascii() {
        let title = Title::new("Engineer");
        assert_eq!(title.len(), 8);
        assert_eq!(title.prefix(0), "");
        assert_eq!(title.prefix(3), "Eng");
        assert_eq!(title.prefix(8), "Engineer");
        assert_eq!(title.prefix(99), "Engineer");
    }

    #[test]
    fn test_title_prefix_graphemes() {
        // "é" as e + combining acute, then a family emoji
        let title = Title::new("e\u{301}👨‍👩‍👧x");
        assert_eq!(title.len(), 3);
        assert_eq!(title.prefix(1), "e\u{301}");
        assert_eq!(title.prefix(2), "e\u{301}👨‍👩‍👧");
    }

    #[test]
    fn test_empty_title() {
        let title = Title::new("");
        assert!(title.is_empty());
        assert_eq!(title.prefix(0), "");
        assert_eq!(title.prefix(1), "");
    }

    #[test]
    fn test_title_list_rejects_empty() {
        let result = TitleList::new(Vec::<&str>::new());
        assert_eq!(result, Err(ConfigError::EmptyTitles));
    }

    #[test]
    fn test_title_list_wraps() {
        let list = TitleList::new(["A", "B", "C"]).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.next_index(0), 1);
        assert_eq!(list.next_index(2), 0);
        assert_eq!(list.get(4).as_str(), "B");
    }

    #[test]
    fn test_parse_separated() {
        let list = TitleList::parse_separated("Data Scientist |  ML Engineer|Speaker ");
        let texts: Vec<&str> = list.iter().map(Title::as_str).collect();
        assert_eq!(texts, ["Data Scientist", "ML Engineer", "Speaker"]);
    }

    #[test]
    fn test_parse_separated_empty_input() {
        let list = TitleList::parse_separated("");
        assert_eq!(list.len(), 1);
        assert!(list.get(0).is_empty());
    }
}
