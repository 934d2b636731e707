//! Fixed 4x8 digit font for the full-grid render mode
//!
//! Ten glyphs, one per decimal digit, each a 4-column by 8-row grid of
//! lit/unlit cells. A plain constant table keeps lookup branch-free and
//! avoids any dispatch machinery.

use crate::constants::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// One digit glyph: 8 rows of 4 cells, row-major, `true` = lit.
pub type Glyph = [[bool; GLYPH_WIDTH as usize]; GLYPH_HEIGHT as usize];

// Shorthand so the table below reads as a bitmap.
const X: bool = true;
const O: bool = false;

/// Glyphs for digits 0-9, indexed by digit value.
pub const DIGIT_GLYPHS: [Glyph; 10] = [
    // 0
    [
        [X, X, X, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, X, X, X],
    ],
    // 1
    [
        [O, O, X, O],
        [O, O, X, O],
        [O, O, X, O],
        [O, O, X, O],
        [O, O, X, O],
        [O, O, X, O],
        [O, O, X, O],
        [O, O, X, O],
    ],
    // 2
    [
        [X, X, X, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
        [X, X, X, X],
        [X, O, O, O],
        [X, O, O, O],
        [X, X, X, X],
    ],
    // 3
    [
        [X, X, X, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
        [X, X, X, X],
        [O, O, O, X],
        [O, O, O, X],
        [X, X, X, X],
    ],
    // 4
    [
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, X, X, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
    ],
    // 5
    [
        [X, X, X, X],
        [X, O, O, O],
        [X, O, O, O],
        [X, O, O, O],
        [X, X, X, X],
        [O, O, O, X],
        [O, O, O, X],
        [X, X, X, X],
    ],
    // 6
    [
        [X, O, O, O],
        [X, O, O, O],
        [X, O, O, O],
        [X, O, O, O],
        [X, X, X, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, X, X, X],
    ],
    // 7
    [
        [X, X, X, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
    ],
    // 8
    [
        [X, X, X, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, X, X, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, X, X, X],
    ],
    // 9
    [
        [X, X, X, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, O, O, X],
        [X, X, X, X],
        [O, O, O, X],
        [O, O, O, X],
        [O, O, O, X],
    ],
];

/// Look up the glyph for a decimal digit.
///
/// Values above 9 wrap via modulo rather than panicking; callers decompose
/// temperatures into single digits before calling.
pub fn glyph_for_digit(digit: u8) -> &'static Glyph {
    &DIGIT_GLYPHS[(digit % 10) as usize]
}
