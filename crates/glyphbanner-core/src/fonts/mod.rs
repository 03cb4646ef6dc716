//! Built-in glyph tables
//!
//! Each table is authored as constant `(key, rows)` data and turned into a
//! [`FontDescriptor`] the first time the font is used.

mod block;
mod mini;
mod small;

use once_cell::sync::Lazy;

use crate::font::FontDescriptor;
use crate::glyph::{Glyph, GlyphTable};

/// Five-row figlet-style font
pub static SMALL: Lazy<FontDescriptor> =
    Lazy::new(|| FontDescriptor::from_rows("Small", 5, small::GLYPHS));

/// Three-row compact font
pub static MINI: Lazy<FontDescriptor> =
    Lazy::new(|| FontDescriptor::new("Mini", 3, case_folded(mini::GLYPHS)));

/// Five-row solid block font
pub static BLOCK: Lazy<FontDescriptor> =
    Lazy::new(|| FontDescriptor::new("Block", 5, case_folded(block::GLYPHS)));

/// Table where each uppercase ASCII letter also answers for its lowercase form
fn case_folded(rows: &[(&str, &[&str])]) -> GlyphTable {
    let mut table = GlyphTable::new();
    for (key, rows) in rows {
        let glyph = Glyph::new(rows.iter().copied());
        let lower = key.to_ascii_lowercase();
        if lower != *key {
            table.insert(lower, glyph.clone());
        }
        table.insert(*key, glyph);
    }
    table
}
