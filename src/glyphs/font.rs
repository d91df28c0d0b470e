//! Static glyph bitmaps
//!
//! Every glyph is exactly [`GLYPH_ROWS`] rows tall; widths vary from one to
//! four cells. Cells are 0/1. There is no construction logic here, only
//! data and the lookup table.

/// Fixed glyph height in rows
pub const GLYPH_ROWS: usize = 7;

/// A fixed-height bitmap for one rendered character.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [&'static [u8]; GLYPH_ROWS],
}

impl Glyph {
    /// Glyph width in cells. All rows of a glyph share the same width.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }
}

const A: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
    ],
};

const B: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 0],
    ],
};

const C: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[0, 1, 1, 1],
    ],
};

const D: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 0],
    ],
};

const E: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 1],
    ],
};

const F: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
    ],
};

const G: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 1],
    ],
};

const H: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
    ],
};

const I: Glyph = Glyph {
    rows: [
        &[1, 1, 1],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[1, 1, 1],
    ],
};

const J: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

const K: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 0, 1, 0],
        &[1, 1, 0, 0],
        &[1, 1, 0, 0],
        &[1, 0, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
    ],
};

const L: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 1],
    ],
};

const M: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
    ],
};

const N: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 1, 0, 1],
        &[1, 1, 0, 1],
        &[1, 0, 1, 1],
        &[1, 0, 1, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
    ],
};

const O: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

// Letter "P": enclosed upper loop, open stem below
const P: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
    ],
};

const Q: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 1, 0],
        &[0, 1, 0, 1],
    ],
};

const R: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 0],
        &[1, 0, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
    ],
};

const S: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[0, 1, 1, 0],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 1, 1, 0],
    ],
};

const T: Glyph = Glyph {
    rows: [
        &[1, 1, 1],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
    ],
};

const U: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

const V: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
        &[0, 1, 1, 0],
    ],
};

const W: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 1, 1, 1],
        &[1, 1, 1, 1],
        &[1, 0, 0, 1],
    ],
};

const X: Glyph = Glyph {
    rows: [
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
        &[0, 1, 1, 0],
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
    ],
};

const Y: Glyph = Glyph {
    rows: [
        &[1, 0, 1],
        &[1, 0, 1],
        &[1, 0, 1],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
    ],
};

const Z: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 1, 0],
        &[0, 1, 0, 0],
        &[1, 0, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 1],
    ],
};

const D0: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 1, 1],
        &[1, 1, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

const D1: Glyph = Glyph {
    rows: [
        &[0, 1, 0],
        &[1, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
        &[1, 1, 1],
    ],
};

const D2: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 0, 1, 0],
        &[0, 1, 0, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 1],
    ],
};

const D3: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 0],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 1, 1, 0],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 1, 1, 0],
    ],
};

const D4: Glyph = Glyph {
    rows: [
        &[0, 0, 1, 0],
        &[0, 1, 1, 0],
        &[1, 0, 1, 0],
        &[1, 1, 1, 1],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
    ],
};

const D5: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 1],
        &[1, 0, 0, 0],
        &[1, 1, 1, 0],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

const D6: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 0],
        &[1, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

const D7: Glyph = Glyph {
    rows: [
        &[1, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 1, 0, 0],
        &[0, 1, 0, 0],
        &[0, 1, 0, 0],
    ],
};

const D8: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

const D9: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[1, 0, 0, 1],
        &[0, 1, 1, 1],
        &[0, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 1, 1, 0],
    ],
};

const BANG: Glyph = Glyph {
    rows: [&[1], &[1], &[1], &[1], &[1], &[0], &[1]],
};

const QUESTION: Glyph = Glyph {
    rows: [
        &[0, 1, 1, 0],
        &[1, 0, 0, 1],
        &[0, 0, 0, 1],
        &[0, 0, 1, 0],
        &[0, 1, 0, 0],
        &[0, 0, 0, 0],
        &[0, 1, 0, 0],
    ],
};

const PERIOD: Glyph = Glyph {
    rows: [&[0], &[0], &[0], &[0], &[0], &[0], &[1]],
};

const HYPHEN: Glyph = Glyph {
    rows: [
        &[0, 0, 0],
        &[0, 0, 0],
        &[0, 0, 0],
        &[1, 1, 1],
        &[0, 0, 0],
        &[0, 0, 0],
        &[0, 0, 0],
    ],
};

const APOSTROPHE: Glyph = Glyph {
    rows: [&[1], &[1], &[0], &[0], &[0], &[0], &[0]],
};

const SPACE: Glyph = Glyph {
    rows: [
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
        &[0, 0],
    ],
};

/// Look up the glyph for a character. Letters are case-insensitive;
/// characters without a glyph return `None`.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        'A' => Some(&A),
        'B' => Some(&B),
        'C' => Some(&C),
        'D' => Some(&D),
        'E' => Some(&E),
        'F' => Some(&F),
        'G' => Some(&G),
        'H' => Some(&H),
        'I' => Some(&I),
        'J' => Some(&J),
        'K' => Some(&K),
        'L' => Some(&L),
        'M' => Some(&M),
        'N' => Some(&N),
        'O' => Some(&O),
        'P' => Some(&P),
        'Q' => Some(&Q),
        'R' => Some(&R),
        'S' => Some(&S),
        'T' => Some(&T),
        'U' => Some(&U),
        'V' => Some(&V),
        'W' => Some(&W),
        'X' => Some(&X),
        'Y' => Some(&Y),
        'Z' => Some(&Z),
        '0' => Some(&D0),
        '1' => Some(&D1),
        '2' => Some(&D2),
        '3' => Some(&D3),
        '4' => Some(&D4),
        '5' => Some(&D5),
        '6' => Some(&D6),
        '7' => Some(&D7),
        '8' => Some(&D8),
        '9' => Some(&D9),
        '!' => Some(&BANG),
        '?' => Some(&QUESTION),
        '.' => Some(&PERIOD),
        '-' => Some(&HYPHEN),
        '\'' => Some(&APOSTROPHE),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// All defined glyphs, for invariant checks.
#[cfg(test)]
pub(crate) fn all_glyphs() -> Vec<(char, &'static Glyph)> {
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!?.-' "
        .chars()
        .map(|ch| (ch, glyph(ch).unwrap()))
        .collect()
}
