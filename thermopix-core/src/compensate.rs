//! CPU-heat compensation for sensor-board temperature readings
//!
//! The sensor board sits a few millimetres above the SoC, so every one of
//! its temperature instruments reads high. Compensation averages the three
//! instruments and subtracts a fixed fraction of the CPU package
//! temperature:
//!
//! ```text
//! corrected = (ambient + pressure_temp + humidity_temp) / 3 - cpu_temp / 5
//! ```
//!
//! The divisors are empirical for one board/computer pairing and carry no
//! uncertainty bound. No range validation is performed - callers supply
//! finite readings from live instruments, and a wildly implausible result
//! is still returned rather than rejected.

use crate::{
    constants::{
        CPU_HEAT_DIVISOR, MILLIDEGREES_PER_DEGREE, MILLIDEGREE_FRACTION_DIGITS, SENSOR_COUNT,
    },
    errors::{CompensationError, CompensationResult},
};

/// Combine three sensor-board readings and the CPU temperature into one
/// corrected ambient estimate.
///
/// All inputs and the result are in Celsius.
pub fn corrected_temperature(
    ambient: f32,
    pressure_temp: f32,
    humidity_temp: f32,
    cpu_temp: f32,
) -> f32 {
    (ambient + pressure_temp + humidity_temp) / SENSOR_COUNT - cpu_temp / CPU_HEAT_DIVISOR
}

/// Convert Celsius to Fahrenheit.
///
/// Not used in the render path; kept as part of the public contract for
/// hosts that report in Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Decode a thermal-zone reading into Celsius.
///
/// The kernel exposes the CPU temperature as a decimal string of
/// millidegrees; the last three digits are the sub-degree part. A leading
/// `-` is accepted for sub-zero package temperatures. Readings with fewer
/// than three digits are malformed.
pub fn parse_millidegrees(raw: &str) -> CompensationResult<f32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);

    if digits.len() < MILLIDEGREE_FRACTION_DIGITS {
        return Err(CompensationError::ReadingTooShort {
            len: digits.len(),
            min: MILLIDEGREE_FRACTION_DIGITS,
        });
    }

    let millidegrees: i64 = trimmed
        .parse()
        .map_err(|_| CompensationError::NotANumber)?;

    Ok(millidegrees as f32 / MILLIDEGREES_PER_DEGREE)
}
