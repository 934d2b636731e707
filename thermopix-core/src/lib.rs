//! Core pipeline for thermopix
//!
//! Turns raw Sense HAT-class sensor readings into a corrected ambient
//! temperature and a color-coded pattern on an 8x8 LED matrix.
//!
//! The correction subtracts a fixed fraction of the host CPU's own
//! temperature from the averaged sensor readings - the sensor board sits
//! close enough to the SoC that its readings run hot.
//!
//! Key constraints:
//! - Pure logic only; all hardware I/O lives behind traits
//! - No heap allocation
//! - Deterministic output for identical input every cycle
//!
//! ```no_run
//! use thermopix_core::{compensate, render, frame::PixelFrame};
//!
//! let temp = compensate::corrected_temperature(34.2, 33.8, 34.9, 52.1);
//! let mut frame = PixelFrame::new();
//!
//! // Draw the temperature as binary digits along the top row
//! render::draw_binary_row(&mut frame, temp);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod compensate;
pub mod constants;
pub mod cycle;
pub mod errors;
pub mod font;
pub mod frame;
pub mod render;
pub mod traits;

// Public API
pub use color::{color_for_temperature, Rgb};
pub use cycle::{run_cycle, CycleConfig};
pub use errors::{CompensationError, CompensationResult};
pub use render::RenderMode;
pub use traits::{CpuThermal, DisplaySurface, Rotation, SensorBoard};

/// Crate version, from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
