//! Pixel-art glyph catalog and banner renderer
//!
//! Fixed 7-row bitmap glyphs for letters, digits and a few symbols, plus
//! the helper that composes them into banner text lines.

pub(crate) mod font;
pub(crate) mod render;

pub use font::{glyph, Glyph, GLYPH_ROWS};
pub use render::render_text;
