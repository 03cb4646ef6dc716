//! Stand-in glyphs for characters a font doesn't define

use crate::dimensions::FontDimensions;
use crate::glyph::Glyph;

/// Marker repeated across every placeholder row
pub const UNKNOWN_MARKER: char = '?';

/// Build the placeholder glyph for a font.
///
/// The glyph is as tall as the font and as wide as its narrowest glyph, so a
/// substitution never takes more room than any real character would. A
/// zero-width font still gets one marker column.
pub fn placeholder_for(dims: &FontDimensions) -> Glyph {
    let row: String = std::iter::repeat(UNKNOWN_MARKER)
        .take(dims.min_width.max(1))
        .collect();
    Glyph::new(std::iter::repeat(row).take(dims.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_min_width() {
        let glyph = placeholder_for(&FontDimensions {
            min_width: 3,
            max_width: 9,
            height: 4,
        });
        assert_eq!(glyph.height(), 4);
        assert_eq!(glyph.width(), 3);
        assert!(glyph.is_uniform());
        assert!(glyph.rows().iter().all(|row| row == "???"));
    }

    #[test]
    fn test_zero_width_font() {
        let glyph = placeholder_for(&FontDimensions {
            min_width: 0,
            max_width: 2,
            height: 2,
        });
        assert_eq!(glyph, Glyph::new(["?", "?"]));
    }
}
