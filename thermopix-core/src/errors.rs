//! Error types for the compensation pipeline
//!
//! Kept deliberately small: errors are `Copy`, carry no heap data, and hold
//! only enough context to tell a malformed reading from a plausible one.
//! Rendering never fails - out-of-range temperatures get a fallback pattern
//! instead of an error (see [`crate::render`]).
//!
//! The only fallible core operation is decoding the thermal-zone string; the
//! I/O that produces that string is the host's concern and carries its own
//! error type.

use thiserror_no_std::Error;

/// Result type for compensation operations
pub type CompensationResult<T> = Result<T, CompensationError>;

/// Failures while decoding a CPU thermal reading
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompensationError {
    /// Thermal-zone value has fewer digits than the millidegree format needs
    #[error("thermal reading has {len} digits, need at least {min}")]
    ReadingTooShort {
        /// Number of digits present in the reading
        len: usize,
        /// Minimum digits required (the fractional part alone)
        min: usize,
    },

    /// Thermal-zone value contains something other than decimal digits
    #[error("thermal reading is not a decimal number")]
    NotANumber,
}

#[cfg(feature = "defmt")]
impl defmt::Format for CompensationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ReadingTooShort { len, min } => {
                defmt::write!(fmt, "thermal reading has {} digits, need {}", len, min)
            }
            Self::NotANumber => defmt::write!(fmt, "thermal reading is not a decimal number"),
        }
    }
}
