//! Bundled demo ephemeris.

use hora_time::jd_to_calendar;

use crate::MoonEphemeris;
use crate::ayanamsha::lahiri_ayanamsha_deg;
use crate::error::EphemError;
use crate::moon::{jd_to_centuries, tropical_moon_longitude_deg};

/// First year the demo series is considered usable.
pub const DEMO_MIN_YEAR: i32 = 1600;
/// Last year the demo series is considered usable.
pub const DEMO_MAX_YEAR: i32 = 2400;

/// Low-precision lunar ephemeris with no external data files.
///
/// Mirrors the role of a bundled demo dataset: usable everywhere, exact
/// nowhere. Construct one and pass it to the pipeline; there is no
/// global instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoEphemeris;

impl DemoEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn check_epoch(jd_utc: f64) -> Result<(), EphemError> {
        let (year, _, _) = jd_to_calendar(jd_utc);
        if !(DEMO_MIN_YEAR..=DEMO_MAX_YEAR).contains(&year) {
            return Err(EphemError::EpochOutOfRange { year });
        }
        Ok(())
    }
}

impl MoonEphemeris for DemoEphemeris {
    fn moon_sidereal_longitude(&self, jd_utc: f64) -> Result<f64, EphemError> {
        Self::check_epoch(jd_utc)?;
        let tropical = tropical_moon_longitude_deg(jd_utc);
        let aya = lahiri_ayanamsha_deg(jd_to_centuries(jd_utc));
        let sidereal = (tropical - aya).rem_euclid(360.0);
        // rem_euclid can land exactly on 360.0 when the operand is a hair
        // below zero
        Ok(if sidereal >= 360.0 { 0.0 } else { sidereal })
    }
}
