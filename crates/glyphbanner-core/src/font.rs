//! Font descriptors and the built-in font selector

use std::fmt;
use std::str::FromStr;

use crate::compose::{compose, RenderedBlock};
use crate::coverage::{describe_missing, join_naturally, missing_characters};
use crate::dimensions::{analyze, FontDimensions};
use crate::error::{CoreError, Result};
use crate::fonts;
use crate::glyph::{Glyph, GlyphTable};
use crate::placeholder::placeholder_for;

/// A glyph table together with its declared line height
///
/// Descriptors are built once and never mutated; the built-in ones live in
/// statics and are shared by every render.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    name: &'static str,
    height: usize,
    glyphs: GlyphTable,
    placeholder: Glyph,
}

impl FontDescriptor {
    /// Build a descriptor and size its placeholder glyph from the table
    pub fn new(name: &'static str, height: usize, glyphs: GlyphTable) -> Self {
        let dims = analyze(&glyphs).unwrap_or_else(|err| {
            tracing::warn!(
                font = name,
                %err,
                "Malformed glyph table, using a one-column placeholder"
            );
            FontDimensions {
                min_width: 1,
                max_width: 1,
                height,
            }
        });
        let placeholder = placeholder_for(&FontDimensions { height, ..dims });

        tracing::debug!(
            font = name,
            glyphs = glyphs.len(),
            height,
            min_width = dims.min_width,
            max_width = dims.max_width,
            "Font loaded"
        );

        Self {
            name,
            height,
            glyphs,
            placeholder,
        }
    }

    /// Build a descriptor from authored `(key, rows)` pairs
    pub fn from_rows(name: &'static str, height: usize, rows: &[(&str, &[&str])]) -> Self {
        let glyphs = rows
            .iter()
            .map(|(key, rows)| (*key, Glyph::new(rows.iter().copied())))
            .collect();
        Self::new(name, height, glyphs)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared number of rows per glyph
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Glyph drawn for characters the table lacks
    pub fn placeholder(&self) -> &Glyph {
        &self.placeholder
    }

    /// Glyph for `key`, falling back to the placeholder
    pub fn glyph(&self, key: &str) -> &Glyph {
        self.glyphs.get(key).unwrap_or(&self.placeholder)
    }

    /// Render `text` with this font
    pub fn render(&self, text: &str) -> RenderedBlock {
        compose(text, self)
    }
}

/// Check a font for authoring defects.
///
/// Reports the first problem class found, naming every offending glyph:
/// an empty or inconsistently tall table, glyphs whose row count differs from
/// the declared height, glyphs with ragged rows, then required characters
/// with no glyph at all.
pub fn validate(font: &FontDescriptor) -> Result<()> {
    analyze(font.glyphs())?;

    let wrong_height = offending_keys(font.glyphs(), |glyph| glyph.height() != font.height());
    if let Some(glyphs) = join_naturally(&wrong_height) {
        return Err(CoreError::WrongRowCount {
            expected: font.height(),
            glyphs,
        });
    }

    let ragged = offending_keys(font.glyphs(), |glyph| !glyph.is_uniform());
    if let Some(glyphs) = join_naturally(&ragged) {
        return Err(CoreError::RaggedGlyph { glyphs });
    }

    if let Some(missing) = describe_missing(&missing_characters(font.glyphs())) {
        return Err(CoreError::MissingGlyphs(missing));
    }

    Ok(())
}

/// Quoted, sorted keys of glyphs matching `is_bad`
fn offending_keys(table: &GlyphTable, is_bad: impl Fn(&Glyph) -> bool) -> Vec<String> {
    let mut keys: Vec<&str> = table
        .iter()
        .filter(|(_, glyph)| is_bad(glyph))
        .map(|(key, _)| key)
        .collect();
    keys.sort_unstable();
    keys.into_iter().map(|key| format!("{key:?}")).collect()
}

/// Built-in fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSelector {
    /// Five-row figlet-style letters
    #[default]
    Small,
    /// Three-row compact letters
    Mini,
    /// Five-row solid block letters
    Block,
}

impl FontSelector {
    /// Every built-in font
    pub const ALL: [FontSelector; 3] = [
        FontSelector::Small,
        FontSelector::Mini,
        FontSelector::Block,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            FontSelector::Small => "small",
            FontSelector::Mini => "mini",
            FontSelector::Block => "block",
        }
    }

    pub fn descriptor(&self) -> &'static FontDescriptor {
        match self {
            FontSelector::Small => &fonts::SMALL,
            FontSelector::Mini => &fonts::MINI,
            FontSelector::Block => &fonts::BLOCK,
        }
    }

    pub fn glyphs(&self) -> &'static GlyphTable {
        self.descriptor().glyphs()
    }

    pub fn height(&self) -> usize {
        self.descriptor().height()
    }

    pub fn render(&self, text: &str) -> RenderedBlock {
        self.descriptor().render(text)
    }
}

impl fmt::Display for FontSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for FontSelector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|font| font.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownFont(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[&str])]) -> GlyphTable {
        entries
            .iter()
            .map(|(key, rows)| (*key, Glyph::new(rows.iter().copied())))
            .collect()
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("small".parse::<FontSelector>(), Ok(FontSelector::Small));
        assert_eq!("MINI".parse::<FontSelector>(), Ok(FontSelector::Mini));
        assert_eq!(" Block ".parse::<FontSelector>(), Ok(FontSelector::Block));
        assert_eq!(
            "gothic".parse::<FontSelector>(),
            Err(CoreError::UnknownFont("gothic".to_string()))
        );
    }

    #[test]
    fn test_selector_display_roundtrip() {
        for font in FontSelector::ALL {
            assert_eq!(font.to_string().parse::<FontSelector>(), Ok(font));
        }
    }

    #[test]
    fn test_glyph_falls_back_to_placeholder() {
        let font = FontDescriptor::new("Tiny", 2, table(&[("x", &["\\/", "/\\"])]));
        assert_eq!(font.glyph("x").row(0), Some("\\/"));
        assert_eq!(font.glyph("y"), font.placeholder());
        assert_eq!(font.placeholder(), &Glyph::new(["??", "??"]));
    }

    #[test]
    fn test_malformed_table_still_gets_placeholder() {
        let font = FontDescriptor::new("Broken", 3, table(&[("a", &["a"]), ("b", &["b", "b"])]));
        assert_eq!(font.placeholder(), &Glyph::new(["?", "?", "?"]));
        assert_eq!(font.render("c").len(), 3);
    }

    #[test]
    fn test_validate_inconsistent_height() {
        let font = FontDescriptor::new("Broken", 2, table(&[("a", &["a"]), ("b", &["b", "b"])]));
        assert_eq!(
            validate(&font),
            Err(CoreError::InconsistentHeight { min: 1, max: 2 })
        );
    }

    #[test]
    fn test_validate_wrong_row_count() {
        let glyphs = table(&[("b", &["b", "b"]), ("a", &["a", "a"])]);
        let font = FontDescriptor::new("Short", 3, glyphs);
        assert_eq!(
            validate(&font),
            Err(CoreError::WrongRowCount {
                expected: 3,
                glyphs: "\"a\" and \"b\"".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_ragged() {
        let glyphs = table(&[("a", &["aa", "a"]), ("b", &["b", "b"])]);
        let font = FontDescriptor::new("Ragged", 2, glyphs);
        assert_eq!(
            validate(&font),
            Err(CoreError::RaggedGlyph {
                glyphs: "\"a\"".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_missing() {
        let font = FontDescriptor::new("Sparse", 1, table(&[("a", &["a"])]));
        match validate(&font) {
            Err(CoreError::MissingGlyphs(missing)) => {
                assert!(missing.starts_with("' ', 'A', 'B'"));
                assert!(!missing.contains("'a'"));
                assert!(missing.ends_with("'}' and '~'"));
            }
            other => panic!("expected missing glyphs, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_builtin_fonts() {
        for font in FontSelector::ALL {
            assert_eq!(validate(font.descriptor()), Ok(()), "font {font}");
        }
    }

    #[test]
    fn test_builtin_glyph_shapes() {
        for font in FontSelector::ALL {
            for (key, glyph) in font.glyphs().iter() {
                assert_eq!(glyph.height(), font.height(), "{font} {key:?}");
                assert!(glyph.is_uniform(), "{font} {key:?}");
            }
        }
    }
}
