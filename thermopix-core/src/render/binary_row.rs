//! Single-row binary renderer
//!
//! Row 0 of the matrix, left to right:
//!
//! ```text
//! columns 0-4   integer magnitude, MSB first, no leading zeros,
//!               in the temperature bucket color
//! columns 5-7   first fractional digit, zero-padded to 3 bits, in blue
//! ```
//!
//! The integer part is truncated toward zero and rendered as its unsigned
//! magnitude; 31 is the largest value whose bits fit the five integer
//! columns, so anything beyond ±31 °C fills the row white instead.

use libm::{fabsf, truncf};

use crate::color::{color_for_temperature, FRACTION_COLOR, ROW_FALLBACK_COLOR};
use crate::constants::{DISPLAY_WIDTH, FRACTION_BIT_WIDTH, FRACTION_COLUMN_OFFSET, ROW_MODE_MAX_MAGNITUDE};
use crate::traits::DisplaySurface;

/// Draw `temperature` as a binary pattern along row 0.
///
/// Never fails; magnitudes beyond the encodable range produce the solid
/// white fallback row. Only lights pixels - the caller clears the surface
/// beforehand.
pub fn draw_binary_row<D: DisplaySurface>(display: &mut D, temperature: f32) {
    if fabsf(temperature) > ROW_MODE_MAX_MAGNITUDE {
        for x in 0..DISPLAY_WIDTH {
            display.set_pixel(x, 0, ROW_FALLBACK_COLOR);
        }
        return;
    }

    let bucket = color_for_temperature(temperature);

    // Integer magnitude, MSB first. Truncation toward zero matches the
    // native float-to-int cast; the sign itself is not drawn.
    let magnitude = (temperature as i32).unsigned_abs();
    let bit_len = if magnitude == 0 {
        1
    } else {
        32 - magnitude.leading_zeros()
    };
    for position in 0..bit_len {
        if (magnitude >> (bit_len - 1 - position)) & 1 == 1 {
            display.set_pixel(position as u8, 0, bucket);
        }
    }

    // First fractional digit as a fixed-width 3-bit field. Digits 8 and 9
    // need a fourth bit and clamp to all-ones.
    let digit = (fabsf(temperature - truncf(temperature)) * 10.0) as u8;
    let field = if digit > 0b111 { 0b111 } else { digit };
    for position in 0..FRACTION_BIT_WIDTH {
        if (field >> (FRACTION_BIT_WIDTH - 1 - position)) & 1 == 1 {
            display.set_pixel(FRACTION_COLUMN_OFFSET + position, 0, FRACTION_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::frame::{PixelFrame, BACKGROUND};

    fn render(temperature: f32) -> PixelFrame {
        let mut frame = PixelFrame::new();
        draw_binary_row(&mut frame, temperature);
        frame
    }

    fn row_pattern(frame: &PixelFrame) -> [bool; 8] {
        core::array::from_fn(|x| frame.pixel(x as u8, 0) != Some(BACKGROUND))
    }

    #[test]
    fn eleven_lights_columns_0_2_3() {
        // 11 = 0b1011, fraction 0 -> no blue bits
        let frame = render(11.0);
        assert_eq!(
            row_pattern(&frame),
            [true, false, true, true, false, false, false, false]
        );
        // Integer bits take the 10-20 bucket color
        assert_eq!(frame.pixel(0, 0), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn fraction_renders_in_fixed_blue() {
        // 20.7 -> integer 0b10100, fraction digit 7 = 0b111
        let frame = render(20.7);
        assert_eq!(
            row_pattern(&frame),
            [true, false, true, false, false, true, true, true]
        );
        assert_eq!(frame.pixel(5, 0), Some(FRACTION_COLOR));
        assert_eq!(frame.pixel(6, 0), Some(FRACTION_COLOR));
        assert_eq!(frame.pixel(7, 0), Some(FRACTION_COLOR));
        // Integer bits keep the bucket color, not blue
        assert_eq!(frame.pixel(0, 0), Some(Rgb::new(255, 255, 0)));
    }

    #[test]
    fn fraction_digits_eight_and_nine_clamp_to_all_ones() {
        let frame = render(5.9);
        // 5 = 0b101; digit 9 needs four bits -> 0b111
        assert_eq!(
            row_pattern(&frame),
            [true, false, true, false, false, true, true, true]
        );
    }

    #[test]
    fn zero_lights_nothing() {
        // 0 = "0": a single zero bit, and fraction digit 0
        let frame = render(0.0);
        assert_eq!(frame.lit_count(), 0);
    }

    #[test]
    fn negative_temperature_uses_magnitude_bits() {
        // -11.0 truncates to -11; magnitude bits match +11
        assert_eq!(row_pattern(&render(-11.0)), row_pattern(&render(11.0)));
        // but the bucket color differs
        assert_eq!(render(-11.0).pixel(0, 0), Some(Rgb::new(0, 191, 255)));
    }

    #[test]
    fn boundary_31_renders_normally() {
        let frame = render(31.0);
        // 31 = 0b11111 fills all five integer columns
        assert_eq!(
            row_pattern(&frame),
            [true, true, true, true, true, false, false, false]
        );
    }

    #[test]
    fn beyond_31_falls_back_to_solid_white_row() {
        for temperature in [31.01, -31.01, 250.0] {
            let frame = render(temperature);
            assert_eq!(row_pattern(&frame), [true; 8]);
            for x in 0..8 {
                assert_eq!(frame.pixel(x, 0), Some(ROW_FALLBACK_COLOR));
            }
            // Fallback stays on row 0
            assert_eq!(frame.lit_count(), 8);
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut frame = PixelFrame::new();
        draw_binary_row(&mut frame, 23.4);
        let first = frame.clone();
        draw_binary_row(&mut frame, 23.4);
        assert_eq!(frame, first);
    }
}
