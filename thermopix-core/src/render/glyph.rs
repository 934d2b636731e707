//! Legacy full-grid glyph renderer
//!
//! Shows the absolute temperature as two decimal digits: the tens glyph in
//! the left four columns, the ones glyph in the right four, both in the
//! bucket color. Sign and fraction are not encoded. Three-digit magnitudes
//! do not fit and fill the whole grid with the bucket color instead.

use libm::{fabsf, fmodf};

use crate::color::{color_for_temperature, Rgb};
use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_WIDTH, GRID_MODE_LIMIT};
use crate::font::{glyph_for_digit, Glyph};
use crate::traits::DisplaySurface;

/// Draw `temperature` as a two-digit glyph pattern across the whole grid.
///
/// Never fails; `|temperature| >= 100` produces the solid fallback fill.
/// Only lights pixels - the caller clears the surface beforehand.
pub fn draw_glyph_grid<D: DisplaySurface>(display: &mut D, temperature: f32) {
    let bucket = color_for_temperature(temperature);
    let magnitude = fabsf(temperature);

    if magnitude >= GRID_MODE_LIMIT {
        for y in 0..DISPLAY_HEIGHT {
            for x in 0..DISPLAY_WIDTH {
                display.set_pixel(x, y, bucket);
            }
        }
        return;
    }

    let tens = (magnitude / 10.0) as u8;
    let ones = fmodf(magnitude, 10.0) as u8;

    blit(display, glyph_for_digit(tens), 0, bucket);
    blit(display, glyph_for_digit(ones), GLYPH_WIDTH, bucket);
}

/// Copy one glyph into the grid at a column offset.
fn blit<D: DisplaySurface>(display: &mut D, glyph: &Glyph, x_offset: u8, color: Rgb) {
    for (y, row) in glyph.iter().enumerate() {
        for (x, lit) in row.iter().enumerate() {
            if *lit {
                display.set_pixel(x_offset + x as u8, y as u8, color);
            }
        }
    }
}
