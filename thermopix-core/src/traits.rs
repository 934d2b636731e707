//! Collaborator seams for hardware the core never touches directly
//!
//! The core is pure: the sensor bus, the kernel thermal file, and the LED
//! matrix driver all live behind these traits. Keep them simple - one
//! method per physical capability, associated error types where a
//! collaborator can actually fail.

use crate::color::Rgb;
use crate::errors::CompensationError;

/// Environmental sensor board exposing three temperature instruments.
///
/// All readings are Celsius. The board reports temperature directly and as
/// a by-product of its pressure and humidity sensors; the compensation
/// formula averages all three.
pub trait SensorBoard {
    /// Raw reading from the dedicated temperature sensor.
    fn ambient_temperature(&mut self) -> f32;

    /// Temperature reported by the pressure sensor's die.
    fn temperature_from_pressure(&mut self) -> f32;

    /// Temperature reported by the humidity sensor's die.
    fn temperature_from_humidity(&mut self) -> f32;
}

/// Source of the host processor's package temperature.
///
/// Reading can fail (missing thermal file, malformed value), and a failed
/// read is fatal to the cycle that issued it - there is no retry.
pub trait CpuThermal {
    /// Transport-specific failure, convertible from a decode failure.
    type Error: From<CompensationError>;

    /// Current CPU temperature in Celsius, read fresh on every call.
    fn cpu_temperature(&mut self) -> Result<f32, Self::Error>;
}

/// Display rotation supported by the matrix driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// Connector at the bottom
    #[default]
    Deg0,
    /// Upside down
    Deg180,
}

/// An 8x8 RGB pixel surface.
///
/// Implementations ignore writes outside the 8x8 grid rather than panic;
/// the renderers only ever write in-bounds.
pub trait DisplaySurface {
    /// Set one pixel. `x` is the column, `y` the row, origin top-left.
    fn set_pixel(&mut self, x: u8, y: u8, color: Rgb);

    /// Blank the whole surface.
    fn clear(&mut self);

    /// Rotate the rendered image.
    fn set_rotation(&mut self, rotation: Rotation);

    /// Dim the LEDs for night-time use.
    fn set_low_light(&mut self, enabled: bool);
}
