use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};

use hora_chart::{ChartConfig, render_price_chart};
use hora_dasha::{
    DashaTimeline, balance_fraction, compute_dasha_timeline, degrees_in_nakshatra,
    nakshatra_from_longitude,
};
use hora_ephem::{DemoEphemeris, MoonEphemeris};
use hora_market::{MarketClient, nse_symbol};
use hora_time::CivilTime;

#[derive(Parser)]
#[command(name = "hora", about = "Vimshottari dasha timeline over market data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 9-period timeline for an explicit lunar longitude
    Periods {
        /// Sidereal lunar longitude in degrees, [0, 360)
        #[arg(long)]
        lon: f64,
        /// Anchor instant (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        anchor: String,
    },
    /// Nakshatra and period balance for a lunar longitude
    Nakshatra {
        /// Sidereal lunar longitude in degrees, [0, 360)
        #[arg(long)]
        lon: f64,
    },
    /// Demo-ephemeris sidereal lunar longitude for an instant
    Moon {
        /// UTC instant (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Fetch prices, compute the timeline, write the overlay chart
    Chart {
        /// Ticker symbol (e.g. RELIANCE)
        #[arg(long)]
        symbol: String,
        /// Listing date (YYYY-MM-DD)
        #[arg(long)]
        listing_date: String,
        /// Local time of day for the anchor (HH:MM, default 10:00)
        #[arg(long, default_value = "10:00")]
        time: String,
        /// Fixed UTC offset of the anchor time (+HH:MM, default +05:30)
        #[arg(long, default_value = "+05:30", allow_hyphen_values = true)]
        utc_offset: String,
        /// Append the NSE exchange suffix to the symbol
        #[arg(long)]
        nse: bool,
        /// Output SVG path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Periods { lon, anchor } => {
            let anchor = parse_civil(&anchor)?;
            let timeline = compute_dasha_timeline(anchor, lon)
                .map_err(|e| format!("error (input): {e}"))?;
            print_timeline(&timeline);
            Ok(())
        }
        Commands::Nakshatra { lon } => {
            let nakshatra =
                nakshatra_from_longitude(lon).map_err(|e| format!("error (input): {e}"))?;
            let degrees = degrees_in_nakshatra(lon).map_err(|e| format!("error (input): {e}"))?;
            let balance = balance_fraction(lon).map_err(|e| format!("error (input): {e}"))?;
            println!(
                "Nakshatra: {} (index {})",
                nakshatra.name(),
                nakshatra.index()
            );
            println!("Degrees in nakshatra: {degrees:.4}");
            println!("Balance of opening period: {:.2}%", balance * 100.0);
            Ok(())
        }
        Commands::Moon { date } => {
            let instant = parse_civil(&date)?;
            let ephemeris = DemoEphemeris::new();
            let lon = ephemeris
                .moon_sidereal_longitude(instant.to_jd_utc())
                .map_err(|e| format!("error (ephemeris): {e}"))?;
            println!("Moon sidereal longitude at {instant}: {lon:.4} deg");
            Ok(())
        }
        Commands::Chart {
            symbol,
            listing_date,
            time,
            utc_offset,
            nse,
            out,
        } => {
            let date = parse_date(&listing_date)?;
            let (hour, minute) = parse_time(&time)?;
            let offset_minutes = parse_utc_offset(&utc_offset)?;
            let local = CivilTime::new(date.year(), date.month(), date.day(), hour, minute, 0.0);
            let anchor_jd = local.to_jd_utc_with_offset(offset_minutes);
            let anchor = CivilTime::from_jd_utc(anchor_jd);

            let ephemeris = DemoEphemeris::new();
            let moon_lon = ephemeris
                .moon_sidereal_longitude(anchor_jd)
                .map_err(|e| format!("error (ephemeris): {e}"))?;
            tracing::info!(moon_lon, %anchor, "moon position at anchor");

            let timeline = compute_dasha_timeline(anchor, moon_lon)
                .map_err(|e| format!("error (input): {e}"))?;
            println!(
                "Starting Mahadasha: {} (Balance: {:.2}%)",
                timeline.start_graha().name(),
                timeline.balance * 100.0
            );

            let ticker = if nse { nse_symbol(&symbol) } else { symbol };
            let client = MarketClient::new().map_err(|e| format!("error (market data): {e}"))?;
            let series = client
                .fetch_daily_closes(&ticker, date)
                .map_err(|e| format!("error (market data): {e}"))?;

            let config = ChartConfig {
                title: format!("{ticker} with Vimshottari Mahadasha"),
                ..ChartConfig::default()
            };
            let svg = render_price_chart(&series, &timeline, &config);
            std::fs::write(&out, svg).map_err(|e| format!("error (output): {e}"))?;
            println!("Chart written to {}", out.display());
            Ok(())
        }
    }
}

fn print_timeline(timeline: &DashaTimeline) {
    println!(
        "Timeline anchored {} in {} (balance {:.2}%)\n",
        CivilTime::from_jd_utc(timeline.anchor_jd),
        timeline.nakshatra.name(),
        timeline.balance * 100.0
    );
    for period in &timeline.periods {
        println!(
            "{:8} {} - {}  ({:.1} days)",
            period.graha.name(),
            period.start_utc(),
            period.end_utc(),
            period.duration_days(),
        );
    }
}

/// Parse YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ.
fn parse_civil(text: &str) -> Result<CivilTime, String> {
    let bad = || format!("error (input): expected YYYY-MM-DD[Thh:mm:ssZ], got {text}");

    let (date_part, time_part) = match text.split_once('T') {
        Some((d, t)) => (d, Some(t.trim_end_matches('Z'))),
        None => (text, None),
    };
    let date = parse_date(date_part).map_err(|_| bad())?;
    let (hour, minute, second) = match time_part {
        None => (0, 0, 0.0),
        Some(t) => {
            let mut it = t.splitn(3, ':');
            let h: u32 = it.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
            let mi: u32 = it.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
            let s: f64 = match it.next() {
                Some(v) => v.parse().map_err(|_| bad())?,
                None => 0.0,
            };
            if h > 23 || mi > 59 || !(0.0..60.0).contains(&s) {
                return Err(bad());
            }
            (h, mi, s)
        }
    };
    Ok(CivilTime::new(
        date.year(),
        date.month(),
        date.day(),
        hour,
        minute,
        second,
    ))
}

/// Parse YYYY-MM-DD with calendar validity checks.
fn parse_date(text: &str) -> Result<NaiveDate, String> {
    let bad = || format!("error (input): expected YYYY-MM-DD, got {text}");
    let mut it = text.splitn(3, '-');
    let y: i32 = it.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
    let m: u32 = it.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
    let d: u32 = it.next().and_then(|v| v.parse().ok()).ok_or_else(bad)?;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(bad)
}

/// Parse HH:MM.
fn parse_time(text: &str) -> Result<(u32, u32), String> {
    let bad = || format!("error (input): expected HH:MM, got {text}");
    let (h, m) = text.split_once(':').ok_or_else(bad)?;
    let hour: u32 = h.parse().map_err(|_| bad())?;
    let minute: u32 = m.parse().map_err(|_| bad())?;
    if hour > 23 || minute > 59 {
        return Err(bad());
    }
    Ok((hour, minute))
}

/// Parse a fixed UTC offset like +05:30 or -04:00 into minutes east.
fn parse_utc_offset(text: &str) -> Result<i32, String> {
    let bad = || format!("error (input): expected +HH:MM or -HH:MM, got {text}");
    let (sign, rest) = match text.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(bad()),
    };
    let (hour, minute) = parse_time(rest).map_err(|_| bad())?;
    Ok(sign * (hour as i32 * 60 + minute as i32))
}
