//! Error types for ephemeris lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from lunar ephemeris computation.
///
/// Kept distinct from the calculator's domain error: an ephemeris
/// failure means the dependency could not answer, not that the caller
/// supplied bad input.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Requested epoch falls outside the implementation's supported era.
    EpochOutOfRange { year: i32 },
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { year } => {
                write!(f, "epoch year {year} outside supported range")
            }
        }
    }
}

impl Error for EphemError {}
