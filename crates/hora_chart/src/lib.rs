//! Chart rendering: closing-price line with dasha period bands.
//!
//! Emits a self-contained SVG document. The renderer is deliberately
//! small and dependency-free: one polyline for the close series, one
//! tinted band per dasha period (clipped to the plotted date range),
//! a label per band, and axis extreme labels.

pub mod svg;

pub use svg::{BAND_COLORS, ChartConfig, render_price_chart};
