//! Error type for the dasha calculator.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from dasha period calculations.
///
/// The calculator is total over valid input; the only failure mode is a
/// longitude outside its domain. Callers holding a wrapped angle must
/// normalize modulo 360 before calling in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum DashaError {
    /// Longitude outside [0, 360) degrees.
    LongitudeOutOfDomain(f64),
}

impl Display for DashaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LongitudeOutOfDomain(lon) => {
                write!(f, "longitude {lon} outside [0, 360) degrees")
            }
        }
    }
}

impl Error for DashaError {}
