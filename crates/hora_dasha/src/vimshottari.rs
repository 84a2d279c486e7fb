//! Vimshottari dasha engine (120 years, 9 grahas).
//!
//! The Moon's nakshatra selects the opening lord (the 9-lord cycle
//! repeats exactly three times over the 27 nakshatras, so the mapping is
//! `nakshatra_index mod 9`); the Moon's progress through that nakshatra
//! fixes how much of the opening lord's period remains. One full rotation
//! is then laid out from the anchor instant.

use hora_time::CivilTime;

use crate::error::DashaError;
use crate::graha::Graha;
use crate::nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, nakshatra_index};
use crate::types::{DashaPeriod, DashaTimeline};

/// Year length for dasha period arithmetic (Julian year approximation;
/// dasha boundaries are not calendar-exact by design of the system).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Total length of one full rotation, in years.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal,
/// Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in years, matching VIMSHOTTARI_SEQUENCE order.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Position in the graha sequence whose lord opens the cycle for a
/// nakshatra. Ashwini, Magha and Mula all begin Ketu.
pub fn start_index(nakshatra_index: u8) -> u8 {
    nakshatra_index % 9
}

/// Fraction of the opening lord's full period remaining at the anchor.
///
/// `1 - (longitude mod span) / span`, in (0, 1]. Exactly 1.0 when the
/// longitude sits on a nakshatra boundary.
pub fn balance_fraction(longitude: f64) -> Result<f64, DashaError> {
    let idx = nakshatra_index(longitude)?;
    // Position derived from the floor index, not fmod, so balance and
    // index cannot disagree at a boundary under float rounding.
    let pos_in_nakshatra = (longitude - idx as f64 * NAKSHATRA_SPAN).max(0.0);
    Ok(1.0 - pos_in_nakshatra / NAKSHATRA_SPAN)
}

/// Lay out one full rotation of 9 periods from the anchor.
///
/// The first period is `years * balance * 365.25` days; each later
/// period is the lord's full span. Periods are contiguous (each starts
/// where the previous one ends) and chronological.
pub fn build_periods(start_index: u8, balance: f64, anchor_jd: f64) -> Vec<DashaPeriod> {
    let n = VIMSHOTTARI_SEQUENCE.len();
    let mut periods = Vec::with_capacity(n);
    let mut cursor = anchor_jd;

    for offset in 0..n {
        let seq_idx = (start_index as usize + offset) % n;
        let graha = VIMSHOTTARI_SEQUENCE[seq_idx];
        let full_days = VIMSHOTTARI_YEARS[seq_idx] * DAYS_PER_YEAR;

        let duration = if offset == 0 {
            full_days * balance
        } else {
            full_days
        };

        let end = cursor + duration;
        periods.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
        });
        cursor = end;
    }

    periods
}

/// Compute the full timeline for an anchor instant and the Moon's
/// sidereal longitude at that instant.
///
/// This is the entry point the display layer consumes. Longitude must be
/// in [0, 360); out-of-range input is rejected before any period is
/// constructed.
pub fn compute_dasha_timeline(
    anchor: CivilTime,
    longitude: f64,
) -> Result<DashaTimeline, DashaError> {
    let nak_idx = nakshatra_index(longitude)?;
    let balance = balance_fraction(longitude)?;
    let anchor_jd = anchor.to_jd_utc();
    let periods = build_periods(start_index(nak_idx), balance, anchor_jd);

    Ok(DashaTimeline {
        anchor_jd,
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        balance,
        periods,
    })
}
