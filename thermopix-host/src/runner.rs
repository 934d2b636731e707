//! Periodic cycle runner
//!
//! Owns nothing but borrows everything: the caller supplies the sensor
//! board, CPU thermal source, and display, and the runner drives
//! read-compensate-render-sleep until stopped or until a cycle fails.
//! Whether a failed run should be restarted is the caller's decision; the
//! runner just hands the error back.

use std::thread;
use std::time::Duration;

use thermopix_core::{run_cycle, CpuThermal, CycleConfig, DisplaySurface, SensorBoard};

use crate::HostError;

/// Periodic driver for the render loop.
pub struct Runner<S, C, D> {
    sensors: S,
    cpu: C,
    display: D,
    config: CycleConfig,
}

impl<S, C, D> Runner<S, C, D>
where
    S: SensorBoard,
    C: CpuThermal,
    D: DisplaySurface,
    HostError: From<C::Error>,
{
    /// Create a runner over the three collaborators.
    pub fn new(sensors: S, cpu: C, display: D, config: CycleConfig) -> Self {
        Self {
            sensors,
            cpu,
            display,
            config,
        }
    }

    /// Run a single cycle, returning the corrected temperature.
    pub fn run_once(&mut self) -> Result<f32, HostError> {
        let corrected = run_cycle(
            &mut self.sensors,
            &mut self.cpu,
            &mut self.display,
            &self.config,
        )?;
        log::info!("rendered corrected temperature {corrected:.1} °C");
        Ok(corrected)
    }

    /// Run cycles forever, sleeping `interval_secs` between them.
    ///
    /// Returns only when a cycle fails; the error is the failing cycle's.
    /// External process termination (a signal) is the normal way out.
    pub fn run(&mut self) -> Result<(), HostError> {
        let interval = Duration::from_secs(self.config.interval_secs);
        loop {
            if let Err(err) = self.run_once() {
                log::error!("cycle failed: {err}");
                return Err(err);
            }
            thread::sleep(interval);
        }
    }

    /// Give the collaborators back, consuming the runner.
    pub fn into_parts(self) -> (S, C, D) {
        (self.sensors, self.cpu, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;
    use thermopix_core::frame::PixelFrame;
    use thermopix_core::Rotation;

    use crate::ThermalZone;

    struct RoomBoard;

    impl SensorBoard for RoomBoard {
        fn ambient_temperature(&mut self) -> f32 {
            33.2
        }
        fn temperature_from_pressure(&mut self) -> f32 {
            33.5
        }
        fn temperature_from_humidity(&mut self) -> f32 {
            34.1
        }
    }

    fn zone_with(content: &str) -> (NamedTempFile, ThermalZone) {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        let zone = ThermalZone::open(file.path()).expect("open zone");
        (file, zone)
    }

    #[test]
    fn run_once_renders_and_reports() {
        let (_file, zone) = zone_with("52000\n");
        let config = CycleConfig {
            nightly: true,
            rotation: Rotation::Deg180,
            ..CycleConfig::default()
        };
        let mut runner = Runner::new(RoomBoard, zone, PixelFrame::new(), config);

        let corrected = runner.run_once().expect("cycle should succeed");
        // (33.2 + 33.5 + 34.1) / 3 - 52 / 5 = 33.6 - 10.4
        assert!((corrected - 23.2).abs() < 1e-3);

        let (_, _, frame) = runner.into_parts();
        assert!(frame.lit_count() > 0);
        assert_eq!(frame.rotation(), Rotation::Deg180);
        assert!(frame.low_light());
    }

    #[test]
    fn failed_read_surfaces_as_host_error() {
        let (_file, zone) = zone_with("??\n");
        let mut runner = Runner::new(RoomBoard, zone, PixelFrame::new(), CycleConfig::default());

        assert!(matches!(runner.run_once(), Err(HostError::Malformed(_))));
    }
}
