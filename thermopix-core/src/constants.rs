//! Constants for the thermopix pipeline
//!
//! All numeric values used by the compensation and rendering code are
//! defined here with their purpose and source. The compensation divisors in
//! particular are empirical: they were tuned for one specific hardware
//! pairing (Sense HAT on a Raspberry Pi B+) against a standalone reference
//! thermometer, and are not self-calibrating.

// ===== DISPLAY GEOMETRY =====

/// Width of the LED matrix in pixels.
pub const DISPLAY_WIDTH: u8 = 8;

/// Height of the LED matrix in pixels.
pub const DISPLAY_HEIGHT: u8 = 8;

/// Width of one digit glyph in the full-grid font (pixels).
///
/// Two glyphs side by side fill the 8-pixel display width.
pub const GLYPH_WIDTH: u8 = 4;

/// Height of one digit glyph in the full-grid font (pixels).
pub const GLYPH_HEIGHT: u8 = 8;

// ===== COMPENSATION =====

/// Number of independent temperature instruments averaged per cycle.
///
/// The sensor board reports temperature three ways: the dedicated sensor,
/// the pressure sensor's die temperature, and the humidity sensor's die
/// temperature.
pub const SENSOR_COUNT: f32 = 3.0;

/// Divisor applied to the CPU temperature before subtraction (°C/°C).
///
/// One fifth of the SoC package temperature approximates its heating
/// contribution to the sensor board. Empirical; verified against a
/// standalone gauge on the target hardware.
pub const CPU_HEAT_DIVISOR: f32 = 5.0;

/// Number of trailing digits in a thermal-zone reading that are
/// sub-degree (the kernel reports millidegrees Celsius).
pub const MILLIDEGREE_FRACTION_DIGITS: usize = 3;

/// Millidegrees per degree Celsius.
pub const MILLIDEGREES_PER_DEGREE: f32 = 1000.0;

// ===== RENDER LIMITS =====

/// Largest temperature magnitude the single-row mode can encode (°C).
///
/// The integer part must fit in the 5 columns left of the fraction field,
/// so magnitudes above 31 fall back to a solid row.
pub const ROW_MODE_MAX_MAGNITUDE: f32 = 31.0;

/// Number of columns reserved for the integer magnitude bits (columns 0-4).
pub const INTEGER_BIT_COLUMNS: u8 = 5;

/// First column of the fractional bit field (columns 5-7).
pub const FRACTION_COLUMN_OFFSET: u8 = 5;

/// Width in bits of the fractional digit field.
///
/// Three columns are spare to the right of the integer field. Fraction
/// digits 8 and 9 would need a fourth bit and are clamped to all-ones
/// instead.
pub const FRACTION_BIT_WIDTH: u8 = 3;

/// Smallest temperature magnitude the full-grid mode cannot encode (°C).
///
/// The grid shows exactly two decimal digits; three-digit magnitudes fall
/// back to a solid fill.
pub const GRID_MODE_LIMIT: f32 = 100.0;

// ===== DRIVING LOOP =====

/// Default seconds between read-compensate-render cycles.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;
