//! Glyphs and glyph tables
//!
//! A glyph is a fixed-height block of rows. Every row of a well-formed glyph
//! has the same display width, and every glyph in a font has the same number
//! of rows. Widths may differ from glyph to glyph.
//!
//! ```text
//!  ___     _    _   _
//! |_ _|  ___   | | | |   three glyphs, three widths,
//!  | |  / _ \  |_| |_|   one height
//! |___| \___/  (_) (_)
//! ```

use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

/// One renderable character: an ordered sequence of rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    /// Build a glyph from its rows, top to bottom
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a glyph from a multi-line block, one row per line.
    ///
    /// A single trailing newline is ignored so raw string literals can end on
    /// their own line.
    pub fn parse(block: &str) -> Self {
        let block = block.strip_suffix('\n').unwrap_or(block);
        Self::new(block.split('\n'))
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Row `index`, if the glyph has that many rows
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Display width of the first row, in terminal columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.width())
    }

    /// Whether every row has the same display width
    pub fn is_uniform(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|row| row.width() == width)
    }
}

/// Mapping from a character's string form to its glyph
///
/// Keys are strings rather than `char` so a single entry can stand for a
/// multi-codepoint grapheme cluster.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: HashMap<String, Glyph>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a glyph, returning the one previously stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(key.into(), glyph)
    }

    pub fn get(&self, key: &str) -> Option<&Glyph> {
        self.glyphs.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.glyphs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over `(key, glyph)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Glyph)> {
        self.glyphs.iter().map(|(key, glyph)| (key.as_str(), glyph))
    }
}

impl<K: Into<String>> FromIterator<(K, Glyph)> for GlyphTable {
    fn from_iter<T: IntoIterator<Item = (K, Glyph)>>(iter: T) -> Self {
        Self {
            glyphs: iter
                .into_iter()
                .map(|(key, glyph)| (key.into(), glyph))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block() {
        let glyph = Glyph::parse(" _ \n| |\n|_|\n");
        assert_eq!(glyph.height(), 3);
        assert_eq!(glyph.row(0), Some(" _ "));
        assert_eq!(glyph.row(2), Some("|_|"));
        assert_eq!(glyph.row(3), None);
        assert_eq!(glyph.width(), 3);
    }

    #[test]
    fn test_parse_keeps_blank_rows() {
        let glyph = Glyph::parse("  \n  \n__");
        assert_eq!(glyph.height(), 3);
        assert_eq!(glyph.row(0), Some("  "));
    }

    #[test]
    fn test_width_counts_columns_not_bytes() {
        let glyph = Glyph::new(["█▀▀", "█▄▄"]);
        assert_eq!(glyph.width(), 3);
        assert!(glyph.is_uniform());
    }

    #[test]
    fn test_ragged_rows_detected() {
        let glyph = Glyph::new(["###", "#"]);
        assert!(!glyph.is_uniform());
    }

    #[test]
    fn test_table_lookup() {
        let table: GlyphTable = [("A", Glyph::new(["/\\"])), ("é", Glyph::new(["e'"]))]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert!(table.contains("A"));
        assert!(table.contains("é"));
        assert!(table.get("B").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = GlyphTable::new();
        assert!(table.insert("x", Glyph::new(["x"])).is_none());
        let previous = table.insert("x", Glyph::new(["X"]));
        assert_eq!(previous, Some(Glyph::new(["x"])));
        assert_eq!(table.len(), 1);
    }
}
