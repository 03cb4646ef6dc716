//! Text composition
//!
//! Rendering is row-major: every character of an input line appends its row
//! `r` to output scanline `r`, for all scanlines at once. Glyphs may therefore
//! have any width as long as they share the font's height.
//!
//! ```text
//!  input "AB\nC"      scanlines
//!                     ┌──────┬──────┐
//!  line 0 ──────────▶ │ A[0] │ B[0] │  row 0
//!                     │ A[1] │ B[1] │  row 1
//!                     │  ..  │  ..  │
//!                     ├──────┼──────┘
//!  line 1 ──────────▶ │ C[0] │         row h
//!                     │  ..  │
//!                     └──────┘
//! ```

use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

use crate::font::FontDescriptor;

/// Finished banner: one row per scanline across all input lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedBlock {
    rows: Vec<String>,
}

impl RenderedBlock {
    /// All rows, top to bottom
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Every row followed by a newline
impl fmt::Display for RenderedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl From<RenderedBlock> for String {
    fn from(block: RenderedBlock) -> Self {
        block.to_string()
    }
}

/// Render `text` with `font`.
///
/// Input is split into lines with [`str::lines`], so empty lines are kept
/// (each becomes `height` empty rows) while a trailing newline does not open
/// an extra line. Each grapheme cluster is looked up verbatim; clusters the
/// font lacks are drawn with its placeholder glyph.
pub fn compose(text: &str, font: &FontDescriptor) -> RenderedBlock {
    let height = font.height();
    let mut rows = Vec::new();
    let mut line_count = 0usize;

    for line in text.lines() {
        line_count += 1;

        if line.is_empty() {
            rows.extend(std::iter::repeat_with(String::new).take(height));
            continue;
        }

        let mut scanlines = vec![String::new(); height];
        for grapheme in line.graphemes(true) {
            let glyph = font.glyph(grapheme);
            // Short glyphs leave the remaining scanlines untouched
            for (scanline, row) in scanlines.iter_mut().zip(glyph.rows()) {
                scanline.push_str(row);
            }
        }
        rows.append(&mut scanlines);
    }

    tracing::trace!(
        font = font.name(),
        lines = line_count,
        rows = rows.len(),
        "Composed banner"
    );

    RenderedBlock { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{Glyph, GlyphTable};
    use pretty_assertions::assert_eq;

    const A: &str = r"   _   
  /_\  
 / _ \ 
/_/ \_\
       ";

    const B: &str = r" ___ 
| _ )
| _ \
|___/
     ";

    fn font() -> FontDescriptor {
        let table: GlyphTable = [
            ("A", Glyph::parse(A)),
            ("B", Glyph::parse(B)),
            ("i", Glyph::new(["_", "|", "|", "|", " "])),
        ]
        .into_iter()
        .collect();
        FontDescriptor::new("Test", 5, table)
    }

    #[test]
    fn test_single_glyph_is_verbatim() {
        let rendered = compose("A", &font()).to_string();
        assert_eq!(rendered, format!("{A}\n"));
    }

    #[test]
    fn test_horizontal_composition() {
        let font = font();
        let rendered = compose("AB", &font);
        let a = Glyph::parse(A);
        let b = Glyph::parse(B);

        assert_eq!(rendered.len(), 5);
        for (r, row) in rendered.rows().iter().enumerate() {
            assert_eq!(row, &format!("{}{}", a.rows()[r], b.rows()[r]));
        }
    }

    #[test]
    fn test_lines_stack_vertically() {
        let rendered = compose("A\nB", &font()).to_string();
        assert_eq!(rendered, format!("{A}\n{B}\n"));
        assert_eq!(rendered.lines().count(), 10);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_crlf_separates_lines() {
        let font = font();
        assert_eq!(compose("A\r\nB", &font), compose("A\nB", &font));
    }

    #[test]
    fn test_empty_text_has_no_rows() {
        let rendered = compose("", &font());
        assert!(rendered.is_empty());
        assert_eq!(rendered.to_string(), "");
    }

    #[test]
    fn test_lone_newline_is_one_blank_group() {
        let rendered = compose("\n", &font());
        assert_eq!(rendered.len(), 5);
        assert!(rendered.rows().iter().all(String::is_empty));
        assert_eq!(rendered.to_string(), "\n".repeat(5));
    }

    #[test]
    fn test_empty_lines_preserved() {
        let rendered = compose("\n\n", &font());
        assert_eq!(rendered.len(), 2 * 5);
        assert!(rendered.rows().iter().all(String::is_empty));

        let rendered = compose("A\n\nB", &font());
        assert_eq!(rendered.len(), 3 * 5);
        assert!(rendered.rows()[5..10].iter().all(String::is_empty));
    }

    #[test]
    fn test_missing_glyph_uses_placeholder() {
        let font = font();
        let rendered = compose("A?B", &font);
        let a = Glyph::parse(A);

        assert_eq!(rendered.len(), 5);
        for (r, row) in rendered.rows().iter().enumerate() {
            let after_a = &row[a.rows()[r].len()..];
            assert!(after_a.starts_with('?'), "row {r}: {row:?}");
        }
        // Narrowest glyph is "i", one column wide
        assert_eq!(font.placeholder().width(), 1);
    }

    #[test]
    fn test_grapheme_cluster_is_one_lookup() {
        let font = font();
        // "e" + combining acute accent: one cluster, one placeholder
        let rendered = compose("e\u{301}", &font);
        assert!(rendered.rows().iter().all(|row| row == "?"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let font = font();
        assert_eq!(compose("AiB\nBiA", &font), compose("AiB\nBiA", &font));
    }

    #[test]
    fn test_into_string() {
        let text: String = compose("i", &font()).into();
        assert_eq!(text, "_\n|\n|\n|\n \n");
    }
}
