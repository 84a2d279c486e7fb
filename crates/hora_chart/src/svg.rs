//! SVG writer for the price-with-periods chart.

use chrono::{Datelike, NaiveDate};

use hora_dasha::DashaTimeline;
use hora_market::PriceSeries;
use hora_time::calendar_to_jd;

/// Band fill colors, one per period slot, cycled in timeline order.
pub const BAND_COLORS: [&str; 9] = [
    "#FFCCCC", "#CCFFCC", "#CCCCFF", "#FFCC99", "#99CCFF", "#FF99CC", "#CCFF99", "#9999FF",
    "#FF9966",
];

/// Geometry and labeling for the rendered chart.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 640,
            title: "Price with Vimshottari Mahadasha".to_string(),
        }
    }
}

/// Plot margins inside the SVG canvas, px.
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 40.0;

fn date_to_jd(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64)
}

/// Render the close series with one tinted band per dasha period.
///
/// Bands outside the plotted date range are dropped; bands straddling an
/// edge are clipped. Output is deterministic for identical inputs.
pub fn render_price_chart(
    series: &PriceSeries,
    timeline: &DashaTimeline,
    config: &ChartConfig,
) -> String {
    let width = config.width as f64;
    let height = config.height as f64;
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"0 0 {} {}\">\n",
        config.width, config.height, config.width, config.height
    ));
    out.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
        config.width, config.height
    ));
    out.push_str(&format!(
        "  <text x=\"{}\" y=\"24\" font-family=\"sans-serif\" font-size=\"16\" \
         text-anchor=\"middle\">{}</text>\n",
        width / 2.0,
        xml_escape(&config.title)
    ));

    let (Some(first), Some(last)) = (series.first_date(), series.last_date()) else {
        out.push_str("</svg>\n");
        return out;
    };
    let jd_min = date_to_jd(first);
    let jd_max = date_to_jd(last);
    let jd_span = (jd_max - jd_min).max(1.0);

    let close_min = series.min_close().unwrap_or(0.0);
    let close_max = series.max_close().unwrap_or(1.0);
    let close_span = (close_max - close_min).max(f64::EPSILON);

    let x_of = |jd: f64| MARGIN_LEFT + (jd - jd_min) / jd_span * plot_w;
    let y_of = |close: f64| MARGIN_TOP + (1.0 - (close - close_min) / close_span) * plot_h;

    // Period bands first, so the price line draws on top
    for (i, period) in timeline.periods.iter().enumerate() {
        let band_start = period.start_jd.max(jd_min);
        let band_end = period.end_jd.min(jd_max);
        if band_end <= band_start {
            continue;
        }
        let x0 = x_of(band_start);
        let x1 = x_of(band_end);
        out.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
             fill=\"{}\" fill-opacity=\"0.35\"/>\n",
            x0,
            MARGIN_TOP,
            x1 - x0,
            plot_h,
            BAND_COLORS[i % BAND_COLORS.len()]
        ));
        out.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"12\">{}</text>\n",
            x0 + 4.0,
            MARGIN_TOP + 14.0,
            period.graha.english_name()
        ));
    }

    // Close-price polyline
    let mut points = String::new();
    for p in &series.points {
        let x = x_of(date_to_jd(p.date));
        let y = y_of(p.close);
        points.push_str(&format!("{x:.2},{y:.2} "));
    }
    out.push_str(&format!(
        "  <polyline fill=\"none\" stroke=\"#1f77b4\" stroke-width=\"1.5\" points=\"{}\"/>\n",
        points.trim_end()
    ));

    // Axis extremes
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"11\" \
         text-anchor=\"end\">{:.2}</text>\n",
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + 10.0,
        close_max
    ));
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"11\" \
         text-anchor=\"end\">{:.2}</text>\n",
        MARGIN_LEFT - 6.0,
        MARGIN_TOP + plot_h,
        close_min
    ));
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"11\">{}</text>\n",
        MARGIN_LEFT,
        height - 12.0,
        first
    ));
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"11\" \
         text-anchor=\"end\">{}</text>\n",
        width - MARGIN_RIGHT,
        height - 12.0,
        last
    ));

    out.push_str("</svg>\n");
    out
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hora_dasha::compute_dasha_timeline;
    use hora_market::ClosePoint;
    use hora_time::CivilTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_series() -> PriceSeries {
        let mut s = PriceSeries::new("RELIANCE.NS");
        // Weekly closes over ~8 years so several bands overlap the range
        let mut date = d(2000, 1, 3);
        let mut close = 200.0;
        for i in 0..420 {
            s.points.push(ClosePoint::new(date, close));
            date += chrono::Duration::days(7);
            close += if i % 3 == 0 { 4.0 } else { -1.5 };
        }
        s
    }

    fn sample_timeline() -> hora_dasha::DashaTimeline {
        compute_dasha_timeline(CivilTime::from_date(2000, 1, 1), 0.0).unwrap()
    }

    #[test]
    fn svg_has_polyline_and_title() {
        let svg = render_price_chart(&sample_series(), &sample_timeline(), &ChartConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("Vimshottari"));
    }

    #[test]
    fn bands_clipped_to_series_range() {
        // Series covers ~8 years from the anchor: only the first two
        // periods (Ketu 7y, then Shukra) can intersect it
        let svg = render_price_chart(&sample_series(), &sample_timeline(), &ChartConfig::default());
        let bands = svg.matches("fill-opacity").count();
        assert_eq!(bands, 2, "expected 2 visible bands:\n{svg}");
        assert!(svg.contains(">Ketu<"));
        assert!(svg.contains(">Venus<"));
        assert!(!svg.contains(">Mercury<"));
    }

    #[test]
    fn band_count_never_exceeds_nine() {
        // A series long enough to cover the whole rotation
        let mut s = PriceSeries::new("LONG");
        let mut date = d(2000, 1, 3);
        for _ in 0..1300 {
            s.points.push(ClosePoint::new(date, 100.0));
            date += chrono::Duration::days(35);
        }
        let svg = render_price_chart(&s, &sample_timeline(), &ChartConfig::default());
        assert_eq!(svg.matches("fill-opacity").count(), 9);
    }

    #[test]
    fn empty_series_yields_bare_document() {
        let svg = render_price_chart(
            &PriceSeries::new("EMPTY"),
            &sample_timeline(),
            &ChartConfig::default(),
        );
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("<polyline"));
        assert!(!svg.contains("fill-opacity"));
    }

    #[test]
    fn deterministic_output() {
        let series = sample_series();
        let timeline = sample_timeline();
        let config = ChartConfig::default();
        let a = render_price_chart(&series, &timeline, &config);
        let b = render_price_chart(&series, &timeline, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn title_is_escaped() {
        let config = ChartConfig {
            title: "A & B <test>".to_string(),
            ..ChartConfig::default()
        };
        let svg = render_price_chart(&sample_series(), &sample_timeline(), &config);
        assert!(svg.contains("A &amp; B &lt;test&gt;"));
        assert!(!svg.contains("<test>"));
    }
}
