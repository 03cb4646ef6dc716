//! Whole-table glyph measurement

use crate::error::{CoreError, Result};
use crate::glyph::GlyphTable;

/// Width range and shared height of a glyph table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDimensions {
    /// Narrowest glyph, in columns
    pub min_width: usize,
    /// Widest glyph, in columns
    pub max_width: usize,
    /// Row count shared by every glyph
    pub height: usize,
}

/// Measure a glyph table.
///
/// Each glyph's row count is its height and its first row's width is its
/// width. All glyphs must agree on height; a table where they don't is a
/// malformed font and yields [`CoreError::InconsistentHeight`].
pub fn analyze(table: &GlyphTable) -> Result<FontDimensions> {
    let mut glyphs = table.iter().map(|(_, glyph)| glyph);
    let first = glyphs.next().ok_or(CoreError::EmptyGlyphTable)?;

    let mut min_width = first.width();
    let mut max_width = min_width;
    let mut min_height = first.height();
    let mut max_height = min_height;

    for glyph in glyphs {
        let (width, height) = (glyph.width(), glyph.height());
        min_width = min_width.min(width);
        max_width = max_width.max(width);
        min_height = min_height.min(height);
        max_height = max_height.max(height);
    }

    if min_height != max_height {
        return Err(CoreError::InconsistentHeight {
            min: min_height,
            max: max_height,
        });
    }

    Ok(FontDimensions {
        min_width,
        max_width,
        height: min_height,
    })
}
