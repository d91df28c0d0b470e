//! Banner rendering
//!
//! Composes glyph bitmaps into text lines: filled cells become `#`, empty
//! cells spaces, with a one-column gap between glyphs. Characters without
//! a glyph are skipped with a warning.

use crate::glyphs::font::{glyph, GLYPH_ROWS};

const FILLED: char = '#';
const EMPTY: char = ' ';

/// Render `text` as a banner of exactly [`GLYPH_ROWS`] lines.
///
/// All returned lines have equal width. Unknown characters are dropped;
/// rendering an empty (or fully unknown) string yields seven empty lines.
pub fn render_text(text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_ROWS];

    for ch in text.chars() {
        let Some(g) = glyph(ch) else {
            log::warn!("No glyph for character {:?}, skipping", ch);
            continue;
        };

        for (index, line) in lines.iter_mut().enumerate() {
            if !line.is_empty() {
                line.push(EMPTY);
            }
            for cell in g.rows[index] {
                line.push(if *cell == 1 { FILLED } else { EMPTY });
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::font::Glyph;

    #[test]
    fn test_render_always_yields_seven_lines() {
        for text in ["", "WORK", "zug zug!", "@@@"] {
            assert_eq!(render_text(text).len(), GLYPH_ROWS);
        }
    }

    #[test]
    fn test_lines_have_uniform_width() {
        let lines = render_text("JOB'S DONE!");
        let width = lines[0].chars().count();
        assert!(width > 0);
        for line in &lines {
            assert_eq!(line.chars().count(), width);
        }
    }

    #[test]
    fn test_width_accounts_for_gaps() {
        let lines = render_text("AB");
        let expected = glyph('A').map(Glyph::width).unwrap()
            + 1
            + glyph('B').map(Glyph::width).unwrap();
        assert_eq!(lines[0].chars().count(), expected);
    }

    #[test]
    fn test_unknown_characters_skipped() {
        assert_eq!(render_text("A"), render_text("A@"));
    }

    #[test]
    fn test_only_fill_and_space_characters_used() {
        for line in render_text("HORDE 123") {
            assert!(line.chars().all(|c| c == FILLED || c == EMPTY));
        }
    }
}
