use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use hotspot_core::core_types::current_season;
use hotspot_core::core_types::record::Metric;
use hotspot_core::table::{AreaRiskRow, AreaSummary, DailySummary, SeasonSummary, WindRoseBin};
use hotspot_core::{
    AirQuality, Area, CorrelationMatrix, DateWindow, FfmcStatus, GenerationCache, GeneratorConfig,
    HeadlineMetrics, HotspotRecord, HotspotTable, RiskLevel, Season, SeasonalOutlook, TableFilter,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Report output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable sections
    Text,
    /// One JSON document
    Json,
}

/// Pontianak hotspot report with configurable window, filters and seed
#[derive(Parser, Debug)]
#[command(name = "hotspot-report")]
#[command(about = "Synthetic fire-risk report for the districts of Pontianak", long_about = None)]
struct Args {
    /// JSON generator config (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Reference date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Days of history before today
    #[arg(short = 'd', long)]
    days: Option<u32>,

    /// Days of forecast after today
    #[arg(short, long)]
    forecast_days: Option<u32>,

    /// Noise seed for a reproducible table
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only include these districts (repeatable; full or short name, e.g. "Utara")
    #[arg(short, long = "area")]
    areas: Vec<Area>,

    /// First date of the view (inclusive)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last date of the view (inclusive)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Only include one season (kemarau/dry, hujan/wet)
    #[arg(long)]
    season: Option<Season>,

    /// Number of wind rose sectors
    #[arg(long, default_value_t = 16)]
    wind_bins: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// Everything the dashboard shows for one selection
#[derive(Debug, Serialize)]
struct Report {
    today: NaiveDate,
    season: Season,
    advisory: &'static str,
    generated_rows: usize,
    view_rows: usize,
    headline: HeadlineMetrics,
    outlook: SeasonalOutlook,
    daily: Vec<DailySummary>,
    areas: Vec<AreaSummary>,
    seasons: Vec<SeasonSummary>,
    risk_counts: Vec<RiskShare>,
    area_risk: Vec<AreaRiskRow>,
    latest: Vec<HotspotRecord>,
    wind_rose: Vec<WindRoseBin>,
    correlation: CorrelationMatrix,
}

#[derive(Debug, Serialize)]
struct RiskShare {
    level: RiskLevel,
    count: usize,
    percent: Option<f64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hotspot_core=info,hotspot_report=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(days) = args.days {
        config.past_days = days;
    }
    if let Some(days) = args.forecast_days {
        config.forecast_days = days;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let key = config
        .generation_key(today)
        .with_context(|| format!("building the date window around {today}"))?;
    info!(
        %today,
        start = %key.window.start(),
        end = %key.window.end(),
        seed = ?key.seed,
        "generating"
    );

    let mut cache = GenerationCache::new(config.generator());
    let full = cache.get_or_generate(&key);

    let filter = build_filter(&args, &key.window)?;
    let view = full.filter(&filter);
    info!(rows = view.len(), of = full.len(), "applied filters");

    let report = build_report(today, &full, &view, args.wind_bins);
    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{json}");
        }
        Format::Text => print_report(&report),
    }
    Ok(())
}

fn build_filter(args: &Args, generated: &DateWindow) -> Result<TableFilter> {
    let mut filter = TableFilter::new();
    if !args.areas.is_empty() {
        filter = filter.with_areas(args.areas.iter().copied());
    }
    if args.from.is_some() || args.to.is_some() {
        let start = args.from.unwrap_or(generated.start());
        let end = args.to.unwrap_or(generated.end());
        let range = DateWindow::new(start, end).context("invalid --from/--to range")?;
        filter = filter.with_window(range);
    }
    if let Some(season) = args.season {
        filter = filter.with_season(season);
    }
    Ok(filter)
}

fn build_report(
    today: NaiveDate,
    full: &HotspotTable,
    view: &HotspotTable,
    wind_bins: usize,
) -> Report {
    let season = current_season(today);
    let counts = view.risk_level_counts();
    Report {
        today,
        season,
        advisory: season.advisory(),
        generated_rows: full.len(),
        view_rows: view.len(),
        headline: HeadlineMetrics::compute(full, view),
        outlook: SeasonalOutlook::compute(today, view),
        daily: view.daily_summary(),
        areas: view.area_summary(),
        seasons: view.seasonal_summary(),
        risk_counts: counts
            .iter()
            .map(|(level, count)| RiskShare {
                level,
                count,
                percent: counts.share(level),
            })
            .collect(),
        area_risk: view.area_risk_matrix(),
        latest: view.latest().records().to_vec(),
        wind_rose: view.wind_rose(wind_bins),
        correlation: view.correlation_matrix(&Metric::RISK_FACTORS),
    }
}

fn fmt_opt(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}{unit}"))
}

fn print_report(report: &Report) {
    println!("=== Pontianak Hotspot Report ===\n");
    println!(
        "Today: {}  Season: {}  ({})",
        report.today, report.season, report.advisory
    );
    println!(
        "Rows: {} of {} generated\n",
        report.view_rows, report.generated_rows
    );

    let headline = &report.headline;
    println!("--- Headline ---");
    println!("Total hotspots:   {} ({:+})", headline.total_hotspots, headline.hotspot_delta);
    println!("Mean rainfall:    {}", fmt_opt(headline.mean_rainfall, " mm"));
    println!("Mean temperature: {}", fmt_opt(headline.mean_temperature, " °C"));
    println!(
        "Mean ISPU:        {} {}",
        fmt_opt(headline.mean_ispu, ""),
        headline.air_quality.map_or("", AirQuality::label)
    );
    println!(
        "Mean FFMC:        {} {}",
        fmt_opt(headline.mean_ffmc, ""),
        headline.ffmc_status.map_or("", FfmcStatus::label)
    );
    println!("High-risk rows:   {}\n", headline.high_risk_rows);

    let outlook = &report.outlook;
    println!("--- Outlook ({}) ---", outlook.season);
    println!(
        "Hotspots {}, rainfall {}",
        outlook.hotspot_trend.label(),
        outlook.rainfall_trend.label()
    );
    println!(
        "Recent mean: {} hotspots/day, {} rainfall\n",
        fmt_opt(outlook.recent_mean_hotspots, ""),
        fmt_opt(outlook.recent_mean_rainfall, " mm")
    );

    println!("--- Daily ---");
    println!(
        "{:<10} {:>8} {:>9} {:>7} {:>7} {:>6}",
        "date", "hotspots", "rain mm", "temp", "rh %", "risk"
    );
    for d in &report.daily {
        println!(
            "{:<10} {:>8} {:>9.1} {:>7.1} {:>7.1} {:>6.1}",
            d.date,
            d.hotspot_total,
            d.mean_rainfall,
            d.mean_temperature,
            d.mean_humidity,
            d.mean_risk_score
        );
    }
    println!();

    println!("--- Districts ---");
    for a in &report.areas {
        println!(
            "{:<18} hotspots {:>5}  rain {:>6.1} mm  risk {:>5.1}  mostly {}",
            a.area, a.hotspot_total, a.mean_rainfall, a.mean_risk_score, a.dominant_risk
        );
    }
    println!();

    println!("--- Seasons ---");
    for s in &report.seasons {
        println!(
            "{:<8} rows {:>4}  hotspots {:>5.1}  rain {:>6.1} mm  temp {:>4.1} °C",
            s.season, s.rows, s.mean_hotspots, s.mean_rainfall, s.mean_temperature
        );
    }
    println!();

    println!("--- Risk levels ---");
    for r in &report.risk_counts {
        println!(
            "{:<14} {:>5}  {}",
            r.level,
            r.count,
            fmt_opt(r.percent, "%")
        );
    }
    print!("\n{:<18}", "district");
    for level in RiskLevel::ALL {
        print!(" {:>13}", level.label());
    }
    println!();
    for row in &report.area_risk {
        print!("{:<18}", row.area);
        for (_, count) in row.counts.iter() {
            print!(" {count:>13}");
        }
        println!();
    }
    println!();

    if let Some(first) = report.latest.first() {
        println!("--- Latest ({}) ---", first.date);
    }
    for r in &report.latest {
        println!(
            "{:<18} ({:.4}, {:.4})  hotspots {:>3}  risk {:>5.1} {:<13}  ispu {:>3}",
            r.area,
            r.coordinates.latitude,
            r.coordinates.longitude,
            r.hotspot_count,
            r.risk_score,
            r.risk_level,
            r.ispu
        );
    }
    println!();

    println!("--- Wind rose ---");
    for bin in &report.wind_rose {
        println!(
            "{:<3} {:>5.1}-{:<5.1} {:>4} {}",
            bin.heading(),
            *bin.from,
            *bin.to,
            bin.count,
            "#".repeat(bin.count.min(60))
        );
    }
    println!();

    println!("--- Correlation ---");
    let corr = &report.correlation;
    print!("{:<16}", "");
    for m in corr.metrics() {
        print!(" {:>15}", m.column());
    }
    println!();
    for (i, m) in corr.metrics().iter().enumerate() {
        print!("{:<16}", m.column());
        for j in 0..corr.metrics().len() {
            print!(" {:>15.2}", corr.values()[(i, j)]);
        }
        println!();
    }
    if let Some((first, second, coefficient)) = corr.strongest_pair() {
        println!("Strongest pair: {first} / {second} ({coefficient:+.2})");
    }
}
