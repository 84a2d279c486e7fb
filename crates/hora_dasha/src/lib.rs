//! Vimshottari dasha (planetary period) calculator.
//!
//! Pure date-interval arithmetic: the Moon's sidereal ecliptic longitude
//! at an anchor instant determines a starting lord and a remaining
//! balance of that lord's period; one full 120-year rotation of the
//! 9-lord cycle is then laid out as contiguous intervals from the anchor.
//!
//! No I/O, no shared state. Ephemeris and market data live in sibling
//! crates behind their own error types.

pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod types;
pub mod vimshottari;

pub use error::DashaError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, degrees_in_nakshatra, nakshatra_from_longitude,
    nakshatra_index,
};
pub use types::{DashaPeriod, DashaTimeline};
pub use vimshottari::{
    DAYS_PER_YEAR, TOTAL_CYCLE_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, balance_fraction,
    build_periods, compute_dasha_timeline, start_index,
};
