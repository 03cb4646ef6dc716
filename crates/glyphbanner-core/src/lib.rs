//! # glyphbanner Core
//!
//! Turns text into multi-line block-glyph banners.
//!
//! This crate provides:
//! - Glyphs and glyph tables keyed by grapheme cluster
//! - Row-major text composition across variable-width glyphs
//! - Placeholder glyphs for characters a font doesn't define
//! - Font measurement and coverage checks for font authors
//! - Built-in `small`, `mini` and `block` fonts
//!
//! ```text
//!        _              _     _
//!  __ _ | | _  _  _ __ | |_  | |__  __ _  _ _   _ _   ___  _ _
//! / _` || || || || '_ \| ' \ | '_ \/ _` || ' \ | ' \ / -_)| '_|
//! \__, ||_| \_, || .__/|_||_||_.__/\__,_||_||_||_||_|\___||_|
//! |___/     |__/ |_|
//! ```
//!
//! ```
//! use glyphbanner_core::{render, FontSelector};
//!
//! let banner = render("Hi", FontSelector::Mini);
//! assert_eq!(banner.lines().count(), FontSelector::Mini.height());
//! ```

pub mod compose;
pub mod coverage;
pub mod dimensions;
pub mod error;
pub mod font;
pub mod fonts;
pub mod glyph;
pub mod placeholder;

pub use compose::RenderedBlock;
pub use coverage::{describe_missing, missing_characters};
pub use dimensions::{analyze, FontDimensions};
pub use error::{CoreError, Result};
pub use font::{validate, FontDescriptor, FontSelector};
pub use glyph::{Glyph, GlyphTable};
pub use placeholder::placeholder_for;

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core engine, loading every built-in font up front
pub fn init() -> Result<()> {
    tracing::info!("Initializing glyphbanner Core v{}", VERSION);
    for font in FontSelector::ALL {
        tracing::debug!(font = %font, glyphs = font.glyphs().len(), "Font ready");
    }
    Ok(())
}

/// Render `text` as a banner in a built-in font
pub fn render(text: &str, font: FontSelector) -> String {
    font.render(text).into()
}

/// Render `text` in the built-in font called `font`
pub fn render_named(text: &str, font: &str) -> Result<String> {
    let font: FontSelector = font.parse()?;
    Ok(render(text, font))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_init() {
        assert!(init().is_ok());
    }

    #[test]
    fn test_render_small_letter() {
        let expected = concat!(
            "   _   \n",
            "  /_\\  \n",
            " / _ \\ \n",
            "/_/ \\_\\\n",
            "       \n",
        );
        assert_eq!(render("A", FontSelector::Small), expected);
    }

    #[test]
    fn test_render_named() {
        assert_eq!(
            render_named("ok", "mini").unwrap(),
            render("ok", FontSelector::Mini)
        );
        assert_eq!(
            render_named("ok", "comic-sans"),
            Err(CoreError::UnknownFont("comic-sans".to_string()))
        );
    }

    #[test]
    fn test_every_font_renders_the_baseline() {
        let text: String = coverage::required_characters().collect();
        for font in FontSelector::ALL {
            let banner = font.render(&text);
            assert_eq!(banner.len(), font.height(), "{font}");

            let expected_width: usize = coverage::required_characters()
                .map(|ch| font.glyphs().get(&ch.to_string()).map_or(0, Glyph::width))
                .sum();
            for row in banner.rows() {
                assert_eq!(row.chars().count(), expected_width, "{font}");
            }
        }
    }

    #[test]
    fn test_unknown_character_substitution() {
        for font in FontSelector::ALL {
            let dims = analyze(font.glyphs()).unwrap();
            let banner = font.render("\u{2603}");
            assert_eq!(banner.len(), font.height());
            for row in banner.rows() {
                assert!(row.chars().count() >= dims.min_width, "{font}: {row:?}");
                assert!(row.chars().all(|c| c == '?'));
            }
        }
    }

    #[test]
    fn test_multiline_banner() {
        for font in FontSelector::ALL {
            let banner = render("Hi\n\nthere", font);
            assert_eq!(banner.lines().count(), 3 * font.height());
            assert!(banner.ends_with('\n'));
        }
    }
}
