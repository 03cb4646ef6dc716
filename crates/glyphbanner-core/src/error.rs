//! Error types for glyphbanner Core

use thiserror::Error;

/// Result type for glyphbanner Core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
///
/// Everything except [`CoreError::UnknownFont`] is a font-authoring defect,
/// surfaced by [`crate::validate`] rather than at render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Font selector name did not match a built-in font
    #[error("Unknown font: {0:?}")]
    UnknownFont(String),

    /// Glyph table has no entries to measure
    #[error("Glyph table is empty")]
    EmptyGlyphTable,

    /// Glyphs in one table disagree on their row count
    #[error("Inconsistent glyph height: rows range from {min} to {max}")]
    InconsistentHeight { min: usize, max: usize },

    /// Glyphs whose row count differs from the declared font height
    #[error("Glyphs {glyphs} do not have {expected} rows")]
    WrongRowCount { expected: usize, glyphs: String },

    /// Glyphs whose rows are not all the same width
    #[error("Glyphs {glyphs} have rows of unequal width")]
    RaggedGlyph { glyphs: String },

    /// Required characters absent from the glyph table
    #[error("Missing glyphs for {0}")]
    MissingGlyphs(String),
}
