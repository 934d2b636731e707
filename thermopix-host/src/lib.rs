//! Linux host plumbing for thermopix
//!
//! The core crate is pure; this crate supplies the two host-side pieces a
//! Raspberry Pi deployment needs:
//!
//! - [`ThermalZone`] - reads the CPU package temperature from the kernel's
//!   thermal pseudo-file and decodes it
//! - [`Runner`] - drives the periodic read-compensate-render-sleep loop
//!   against whatever sensor board and display the caller owns
//!
//! The actual sensor bus and LED-matrix driver stay behind the core's
//! traits; any crate that talks to the real hardware plugs in there.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod runner;
pub mod thermal_zone;

pub use runner::Runner;
pub use thermal_zone::ThermalZone;

use thermopix_core::CompensationError;

/// Host-side failures.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Thermal-zone file missing or unreadable
    #[error("thermal zone I/O: {0}")]
    Io(#[from] std::io::Error),

    /// Thermal-zone contents could not be decoded
    #[error("thermal zone value: {0}")]
    Malformed(#[from] CompensationError),
}
