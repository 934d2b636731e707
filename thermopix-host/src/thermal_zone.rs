//! CPU temperature from the kernel thermal pseudo-file
//!
//! The kernel exposes each thermal zone as a pseudo-file whose whole
//! content is the zone temperature in millidegrees Celsius. The file is
//! held open for the reader's lifetime and re-sought to position zero
//! before every read, so each query sees the kernel's current value
//! without reopening. The handle is released on drop, on every exit path.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use thermopix_core::{compensate, CpuThermal};

use crate::HostError;

/// Default zone path on Raspberry Pi class hardware.
pub const DEFAULT_THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Scoped reader for one thermal-zone file.
///
/// ## Example
///
/// ```rust,no_run
/// use thermopix_host::ThermalZone;
/// use thermopix_core::CpuThermal;
///
/// # fn main() -> Result<(), thermopix_host::HostError> {
/// let mut zone = ThermalZone::open_default()?;
/// let celsius = zone.cpu_temperature()?;
/// # Ok(())
/// # }
/// ```
pub struct ThermalZone {
    file: File,
    path: PathBuf,
}

impl ThermalZone {
    /// Open the default Raspberry Pi thermal zone.
    pub fn open_default() -> Result<Self, HostError> {
        Self::open(DEFAULT_THERMAL_ZONE)
    }

    /// Open a specific thermal-zone file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HostError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        Ok(Self { file, path })
    }

    /// Path this reader was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current zone temperature in Celsius.
    ///
    /// Seeks back to the start and rereads the whole file, so repeated
    /// calls track the live value.
    pub fn read_celsius(&mut self) -> Result<f32, HostError> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut raw = String::new();
        self.file.read_to_string(&mut raw)?;
        Ok(compensate::parse_millidegrees(&raw)?)
    }
}

impl CpuThermal for ThermalZone {
    type Error = HostError;

    fn cpu_temperature(&mut self) -> Result<f32, Self::Error> {
        self.read_celsius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn zone_with(content: &str) -> (NamedTempFile, ThermalZone) {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        let zone = ThermalZone::open(file.path()).expect("open zone");
        (file, zone)
    }

    #[test]
    fn reads_millidegrees_as_celsius() {
        let (_file, mut zone) = zone_with("48692\n");
        let celsius = zone.read_celsius().expect("read zone");
        assert!((celsius - 48.692).abs() < 1e-4);
    }

    #[test]
    fn repeated_reads_reseek_to_start() {
        let (_file, mut zone) = zone_with("51000\n");
        let first = zone.read_celsius().expect("first read");
        let second = zone.read_celsius().expect("second read");
        assert_eq!(first, second);
    }

    #[test]
    fn tracks_value_changes_between_reads() {
        let (mut file, mut zone) = zone_with("40000\n");
        assert!((zone.read_celsius().expect("read") - 40.0).abs() < 1e-4);

        // Rewrite the backing file the way the kernel updates the zone
        file.as_file_mut()
            .set_len(0)
            .expect("truncate backing file");
        file.as_file_mut()
            .seek(SeekFrom::Start(0))
            .expect("rewind backing file");
        file.write_all(b"41500\n").expect("rewrite backing file");

        assert!((zone.read_celsius().expect("reread") - 41.5).abs() < 1e-4);
    }

    #[test]
    fn missing_zone_is_an_io_error() {
        let result = ThermalZone::open("/nonexistent/thermal_zone99/temp");
        assert!(matches!(result, Err(HostError::Io(_))));
    }

    #[test]
    fn malformed_zone_is_a_parse_error() {
        let (_file, mut zone) = zone_with("zz\n");
        assert!(matches!(
            zone.read_celsius(),
            Err(HostError::Malformed(_))
        ));
    }
}
