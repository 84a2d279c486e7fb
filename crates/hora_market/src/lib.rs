//! Daily closing-price retrieval for a ticker symbol.
//!
//! This crate provides:
//! - `MarketClient`, a blocking HTTP client for a Yahoo-style v8 chart
//!   endpoint (URL building separated from pure JSON parsing)
//! - `PriceSeries` / `ClosePoint`, the time-indexed close series handed
//!   to the chart renderer
//!
//! Failures surface as `MarketError` variants so callers can tell an
//! unknown ticker from a transport problem; they are never folded into
//! the calculator's input-domain error.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_CHART_API_BASE, MarketClient, nse_symbol};
pub use error::MarketError;
pub use types::{ClosePoint, PriceSeries};
