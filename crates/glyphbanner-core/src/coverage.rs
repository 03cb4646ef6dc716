//! Required-character coverage checks
//!
//! Every built-in font must provide a glyph for space, the ASCII letters and
//! digits, and the ASCII punctuation symbols. These checks run from
//! [`crate::validate`] and the test suite, never while rendering.

use crate::glyph::GlyphTable;

/// ASCII punctuation every font must cover
pub const REQUIRED_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Every character a complete font must cover, in reporting order
pub fn required_characters() -> impl Iterator<Item = char> {
    std::iter::once(' ')
        .chain('A'..='Z')
        .chain('a'..='z')
        .chain('0'..='9')
        .chain(REQUIRED_PUNCTUATION.chars())
}

/// Required characters with no glyph in `table`
pub fn missing_characters(table: &GlyphTable) -> Vec<char> {
    let mut key = [0u8; 4];
    required_characters()
        .filter(|ch| !table.contains(ch.encode_utf8(&mut key)))
        .collect()
}

/// Human-readable list of missing characters, or `None` if nothing is missing
///
/// ```
/// use glyphbanner_core::coverage::describe_missing;
///
/// assert_eq!(describe_missing(&['x', 'y', 'z']).as_deref(), Some("'x', 'y' and 'z'"));
/// ```
pub fn describe_missing(missing: &[char]) -> Option<String> {
    let names: Vec<String> = missing.iter().map(|ch| format!("{ch:?}")).collect();
    join_naturally(&names)
}

/// Join names as "a", "a and b", "a, b and c"
pub(crate) fn join_naturally<S: AsRef<str>>(names: &[S]) -> Option<String> {
    match names {
        [] => None,
        [only] => Some(only.as_ref().to_string()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            Some(format!("{} and {}", head.join(", "), last.as_ref()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Glyph;

    #[test]
    fn test_baseline_size() {
        assert_eq!(REQUIRED_PUNCTUATION.chars().count(), 32);
        assert_eq!(required_characters().count(), 1 + 26 + 26 + 10 + 32);
    }

    #[test]
    fn test_empty_table_misses_everything() {
        let missing = missing_characters(&GlyphTable::new());
        assert_eq!(missing.len(), required_characters().count());
        assert_eq!(missing[0], ' ');
    }

    #[test]
    fn test_full_table_misses_nothing() {
        let table: GlyphTable = required_characters()
            .map(|ch| (ch.to_string(), Glyph::new(["#"])))
            .collect();
        assert!(missing_characters(&table).is_empty());
    }

    #[test]
    fn test_reports_only_gaps() {
        let table: GlyphTable = required_characters()
            .filter(|ch| !matches!(*ch, 'q' | '7' | '~'))
            .map(|ch| (ch.to_string(), Glyph::new(["#"])))
            .collect();
        assert_eq!(missing_characters(&table), vec!['q', '7', '~']);
    }

    #[test]
    fn test_describe_missing() {
        assert_eq!(describe_missing(&[]), None);
        assert_eq!(describe_missing(&['A']).as_deref(), Some("'A'"));
        assert_eq!(
            describe_missing(&['A', 'b']).as_deref(),
            Some("'A' and 'b'")
        );
        assert_eq!(
            describe_missing(&[' ', '\\', '\'']).as_deref(),
            Some("' ', '\\\\' and '\\''")
        );
    }
}
