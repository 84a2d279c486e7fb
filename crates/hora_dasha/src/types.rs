//! Core types for dasha period calculations.

use hora_time::CivilTime;

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

/// A single mahadasha period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Start instant as a civil calendar date.
    pub fn start_utc(&self) -> CivilTime {
        CivilTime::from_jd_utc(self.start_jd)
    }

    /// End instant as a civil calendar date.
    pub fn end_utc(&self) -> CivilTime {
        CivilTime::from_jd_utc(self.end_jd)
    }
}

/// One full Vimshottari rotation anchored at an instant.
///
/// Exactly 9 contiguous periods; the first is truncated to the balance
/// remaining at the anchor. Immutable once built and valid only relative
/// to its anchor.
#[derive(Debug, Clone)]
pub struct DashaTimeline {
    /// Anchor instant, JD UTC.
    pub anchor_jd: f64,
    /// The Moon's nakshatra at the anchor.
    pub nakshatra: Nakshatra,
    /// Fraction of the first lord's full period remaining, (0, 1].
    pub balance: f64,
    /// The 9 periods in chronological order.
    pub periods: Vec<DashaPeriod>,
}

impl DashaTimeline {
    /// The lord of the first (partial) period.
    pub fn start_graha(&self) -> Graha {
        self.periods[0].graha
    }

    /// End of the final period, JD UTC.
    pub fn end_jd(&self) -> f64 {
        self.periods[self.periods.len() - 1].end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_days() {
        let p = DashaPeriod {
            graha: Graha::Ketu,
            start_jd: 2_451_545.0,
            end_jd: 2_451_545.0 + 2556.75,
        };
        assert!((p.duration_days() - 2556.75).abs() < 1e-10);
    }

    #[test]
    fn period_civil_accessors() {
        let p = DashaPeriod {
            graha: Graha::Shukra,
            start_jd: 2_451_544.5, // 2000-01-01 00:00 UTC
            end_jd: 2_451_545.5,
        };
        let start = p.start_utc();
        assert_eq!((start.year, start.month, start.day), (2000, 1, 1));
        let end = p.end_utc();
        assert_eq!((end.year, end.month, end.day), (2000, 1, 2));
    }
}
