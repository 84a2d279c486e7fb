//! Error types for market data retrieval.

use thiserror::Error;

/// Errors from the market data client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MarketError {
    /// Transport-level failure (DNS, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("market endpoint returned HTTP {0}")]
    Status(u16),

    /// The payload did not match the expected chart shape.
    #[error("could not parse market payload: {0}")]
    Parse(String),

    /// The endpoint answered but carried no usable closing prices.
    #[error("no price data for symbol {symbol}")]
    NoData { symbol: String },
}

impl From<reqwest::Error> for MarketError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}
