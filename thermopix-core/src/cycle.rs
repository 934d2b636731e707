//! One read-compensate-render cycle
//!
//! The driving loop owns the collaborators and the configuration; each
//! cycle borrows them, so no process-wide state survives between cycles.
//! A cycle is all-or-nothing: a failed CPU-temperature read aborts it with
//! the collaborator's error and nothing is drawn.

use crate::compensate::corrected_temperature;
use crate::constants::DEFAULT_INTERVAL_SECS;
use crate::render::{draw, RenderMode};
use crate::traits::{CpuThermal, DisplaySurface, Rotation, SensorBoard};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Driving-loop configuration, passed explicitly into every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleConfig {
    /// Seconds between cycles (the host runner sleeps this long).
    pub interval_secs: u64,
    /// Dim the display for night-time use.
    pub nightly: bool,
    /// Display rotation.
    pub rotation: Rotation,
    /// Which renderer to use.
    pub mode: RenderMode,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            nightly: false,
            rotation: Rotation::default(),
            mode: RenderMode::default(),
        }
    }
}

/// Run one full cycle: read all four instruments, compensate, clear the
/// display, and draw.
///
/// Returns the corrected temperature that was rendered. The only error
/// path is the CPU-temperature read; sensor-board readings and rendering
/// are infallible.
pub fn run_cycle<S, C, D>(
    sensors: &mut S,
    cpu: &mut C,
    display: &mut D,
    config: &CycleConfig,
) -> Result<f32, C::Error>
where
    S: SensorBoard,
    C: CpuThermal,
    D: DisplaySurface,
{
    let ambient = sensors.ambient_temperature();
    let pressure_temp = sensors.temperature_from_pressure();
    let humidity_temp = sensors.temperature_from_humidity();
    let cpu_temp = cpu.cpu_temperature()?;

    let corrected = corrected_temperature(ambient, pressure_temp, humidity_temp, cpu_temp);
    log_debug!(
        "readings: ambient={ambient:.2} pressure={pressure_temp:.2} \
         humidity={humidity_temp:.2} cpu={cpu_temp:.2} corrected={corrected:.2}"
    );

    display.set_rotation(config.rotation);
    display.set_low_light(config.nightly);
    display.clear();
    draw(display, corrected, config.mode);

    Ok(corrected)
}
