//! Price series types.

use chrono::NaiveDate;

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl ClosePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Time-indexed daily closing prices for one symbol, ascending by date.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<ClosePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// First trading day in the series.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Last trading day in the series.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Lowest close in the series.
    pub fn min_close(&self) -> Option<f64> {
        self.points.iter().map(|p| p.close).reduce(f64::min)
    }

    /// Highest close in the series.
    pub fn max_close(&self) -> Option<f64> {
        self.points.iter().map(|p| p.close).reduce(f64::max)
    }
}
