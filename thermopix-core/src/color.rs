//! Temperature color scale
//!
//! Ten fixed RGB buckets cover the whole real line in 10 °C steps, running
//! red at 40 °C and above down through greens and cyans to deep blue below
//! -40 °C. Selection walks the ladder top-down and takes the first rung
//! whose threshold the temperature meets, so exactly one bucket matches any
//! finite value and a boundary temperature (40.0) lands in the upper
//! bucket.

/// An RGB color as sent to the LED matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Construct a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color of the fractional bit field in single-row mode.
///
/// Always blue, regardless of bucket, so the fraction reads apart from the
/// integer bits.
pub const FRACTION_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Fill color for the single-row out-of-range fallback.
pub const ROW_FALLBACK_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Descending threshold ladder: the first rung whose threshold is met wins.
///
/// Buckets are contiguous, non-overlapping, and totally ordered by lower
/// bound. Temperatures below every rung take [`BELOW_SCALE_COLOR`].
const COLOR_SCALE: [(f32, Rgb); 9] = [
    (40.0, Rgb::new(255, 0, 0)),
    (30.0, Rgb::new(255, 128, 0)),
    (20.0, Rgb::new(255, 255, 0)),
    (10.0, Rgb::new(0, 255, 0)),
    (0.0, Rgb::new(0, 255, 128)),
    (-10.0, Rgb::new(0, 255, 255)),
    (-20.0, Rgb::new(0, 191, 255)),
    (-30.0, Rgb::new(0, 127, 255)),
    (-40.0, Rgb::new(0, 64, 255)),
];

/// Color for temperatures colder than the lowest ladder rung.
const BELOW_SCALE_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Select the color bucket for a corrected temperature.
///
/// Total over all finite inputs; never fails.
pub fn color_for_temperature(celsius: f32) -> Rgb {
    for (threshold, color) in COLOR_SCALE {
        if celsius >= threshold {
            return color;
        }
    }
    BELOW_SCALE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_lands_in_upper_bucket() {
        assert_eq!(color_for_temperature(40.0), Rgb::new(255, 0, 0));
        assert_eq!(color_for_temperature(39.999), Rgb::new(255, 128, 0));
        assert_eq!(color_for_temperature(0.0), Rgb::new(0, 255, 128));
        assert_eq!(color_for_temperature(-40.0), Rgb::new(0, 64, 255));
        assert_eq!(color_for_temperature(-40.1), Rgb::new(0, 0, 255));
    }

    #[test]
    fn extremes_still_bucket() {
        assert_eq!(color_for_temperature(1000.0), Rgb::new(255, 0, 0));
        assert_eq!(color_for_temperature(-1000.0), Rgb::new(0, 0, 255));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_finite_temperature_gets_a_bucket(t in -500.0f32..500.0) {
                // Total function: walking the ladder always terminates in
                // exactly one bucket
                let _ = color_for_temperature(t);
            }

            #[test]
            fn buckets_are_ten_degrees_wide(t in -50.0f32..40.0) {
                // Shifting by a full bucket width always changes the color
                prop_assert_ne!(
                    color_for_temperature(t),
                    color_for_temperature(t + 10.0)
                );
            }
        }
    }
}
