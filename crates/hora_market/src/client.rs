//! Chart-endpoint client: URL building, fetching, payload parsing.
//!
//! Endpoint shape is the Yahoo v8 chart API:
//! `GET {base}/v8/finance/chart/{symbol}?period1=..&period2=..&interval=1d`
//! with the series under `chart.result[0].timestamp[]` and
//! `chart.result[0].indicators.quote[0].close[]` (nullable on holidays).
//!
//! Parsing is a pure function over the JSON text so it can be tested
//! without a network.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use reqwest::blocking::Client;

use crate::error::MarketError;
use crate::types::{ClosePoint, PriceSeries};

/// Default chart API base URL.
pub const DEFAULT_CHART_API_BASE: &str = "https://query1.finance.yahoo.com";

/// Append the NSE exchange suffix to a bare symbol.
///
/// Listings quoted on the National Stock Exchange carry a `.NS` suffix
/// on this endpoint; symbols that already name an exchange are left
/// alone.
pub fn nse_symbol(symbol: &str) -> String {
    if symbol.contains('.') {
        symbol.to_string()
    } else {
        format!("{symbol}.NS")
    }
}

/// Blocking client for the daily-close chart endpoint.
#[derive(Debug, Clone)]
pub struct MarketClient {
    base_url: String,
    client: Client,
}

impl MarketClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self, MarketError> {
        Self::with_base_url(DEFAULT_CHART_API_BASE)
    }

    /// Create a client against a specific base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MarketError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("hora/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MarketError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Build the chart URL for a symbol and an inclusive date range.
    pub fn chart_url(&self, symbol: &str, from: NaiveDate, to: NaiveDate) -> String {
        let period1 = NaiveDateTime::new(from, NaiveTime::MIN).and_utc().timestamp();
        let period2 = NaiveDateTime::new(to, NaiveTime::MIN).and_utc().timestamp() + 86_399;
        format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, symbol, period1, period2
        )
    }

    /// Fetch daily closes from `from` through today.
    pub fn fetch_daily_closes(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<PriceSeries, MarketError> {
        let to = Utc::now().date_naive();
        let url = self.chart_url(symbol, from, to);
        tracing::info!(symbol, %from, "fetching daily closes");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketError::Status(status.as_u16()));
        }
        let body = response.text()?;
        let series = parse_chart(&body, symbol)?;
        tracing::info!(symbol, points = series.len(), "market data received");
        Ok(series)
    }
}

/// Parse a v8 chart payload into a close series.
///
/// Null closes (market holidays, halts) are skipped rather than recorded
/// as zeros.
pub fn parse_chart(json: &str, symbol: &str) -> Result<PriceSeries, MarketError> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).map_err(|e| MarketError::Parse(e.to_string()))?;

    let chart = parsed
        .get("chart")
        .ok_or_else(|| MarketError::Parse("missing chart object".into()))?;

    if let Some(err) = chart.get("error").filter(|e| !e.is_null()) {
        let description = err
            .get("description")
            .and_then(|d| d.as_str())
            .unwrap_or("unspecified endpoint error");
        return Err(MarketError::Parse(description.to_string()));
    }

    let result = chart
        .get("result")
        .and_then(|r| r.as_array())
        .and_then(|r| r.first())
        .ok_or_else(|| MarketError::NoData {
            symbol: symbol.to_string(),
        })?;

    let timestamps: Vec<i64> = result
        .get("timestamp")
        .and_then(|t| t.as_array())
        .map(|arr| arr.iter().filter_map(|v| v.as_i64()).collect())
        .unwrap_or_default();

    let closes = result
        .get("indicators")
        .and_then(|i| i.get("quote"))
        .and_then(|q| q.as_array())
        .and_then(|q| q.first())
        .and_then(|q| q.get("close"))
        .and_then(|c| c.as_array())
        .ok_or_else(|| MarketError::Parse("missing close series".into()))?;

    let mut series = PriceSeries::new(symbol);
    for (ts, close) in timestamps.iter().zip(closes.iter()) {
        let Some(close) = close.as_f64() else {
            continue;
        };
        let Some(date) = DateTime::<Utc>::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
            continue;
        };
        series.points.push(ClosePoint::new(date, close));
    }

    if series.is_empty() {
        return Err(MarketError::NoData {
            symbol: symbol.to_string(),
        });
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    const GOOD_PAYLOAD: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "RELIANCE.NS"},
                "timestamp": [946684800, 946771200, 946857600],
                "indicators": {"quote": [{"close": [233.5, null, 240.25]}]}
            }],
            "error": null
        }
    }"#;

    #[test]
    fn nse_suffix_applied() {
        assert_eq!(nse_symbol("RELIANCE"), "RELIANCE.NS");
        assert_eq!(nse_symbol("TCS"), "TCS.NS");
    }

    #[test]
    fn nse_suffix_not_doubled() {
        assert_eq!(nse_symbol("RELIANCE.NS"), "RELIANCE.NS");
        assert_eq!(nse_symbol("BRK.B"), "BRK.B");
    }

    #[test]
    fn chart_url_contains_range() {
        let client = MarketClient::with_base_url("https://example.test").unwrap();
        let url = client.chart_url("RELIANCE.NS", d(2000, 1, 1), d(2000, 2, 1));
        assert!(url.starts_with("https://example.test/v8/finance/chart/RELIANCE.NS?"));
        assert!(url.contains("period1=946684800"));
        assert!(url.contains("interval=1d"));
    }

    #[test]
    fn parse_good_payload_skips_null_closes() {
        let series = parse_chart(GOOD_PAYLOAD, "RELIANCE.NS").unwrap();
        assert_eq!(series.symbol, "RELIANCE.NS");
        // 3 timestamps, middle close is null
        assert_eq!(series.len(), 2);
        assert_eq!(series.points[0].date, d(2000, 1, 1));
        assert!((series.points[0].close - 233.5).abs() < 1e-12);
        assert_eq!(series.points[1].date, d(2000, 1, 3));
    }

    #[test]
    fn parse_endpoint_error_body() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let err = parse_chart(json, "BOGUS.NS").unwrap_err();
        assert!(matches!(err, MarketError::Parse(msg) if msg.contains("delisted")));
    }

    #[test]
    fn parse_empty_result_is_no_data() {
        let json = r#"{"chart": {"result": [], "error": null}}"#;
        let err = parse_chart(json, "EMPTY.NS").unwrap_err();
        assert!(matches!(err, MarketError::NoData { symbol } if symbol == "EMPTY.NS"));
    }

    #[test]
    fn parse_all_null_closes_is_no_data() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [946684800],
                    "indicators": {"quote": [{"close": [null]}]}
                }],
                "error": null
            }
        }"#;
        assert!(matches!(
            parse_chart(json, "X.NS").unwrap_err(),
            MarketError::NoData { .. }
        ));
    }

    #[test]
    fn parse_garbage_is_parse_error() {
        assert!(matches!(
            parse_chart("not json", "X").unwrap_err(),
            MarketError::Parse(_)
        ));
        assert!(matches!(
            parse_chart("{}", "X").unwrap_err(),
            MarketError::Parse(_)
        ));
    }
}
