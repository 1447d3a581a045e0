//! Headline numbers and the seasonal outlook shown above the charts
//!
//! Both take the full generated table and the filtered view separately: the
//! hotspot delta compares the view against the whole table's previous day,
//! independent of the selected filters.

use crate::core_types::indices::{AirQuality, FfmcStatus};
use crate::core_types::record::Metric;
use crate::core_types::season::{current_season, Season};
use crate::table::HotspotTable;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of trailing daily summaries averaged by the outlook
pub const OUTLOOK_TRAILING_DAYS: usize = 14;

/// Key metrics for the current selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineMetrics {
    /// Hotspots in the view
    pub total_hotspots: u64,
    /// `total_hotspots` minus the full table's total on the day before its last date
    pub hotspot_delta: i64,
    /// Mean rainfall of the view (mm)
    pub mean_rainfall: Option<f64>,
    /// Mean temperature of the view (°C)
    pub mean_temperature: Option<f64>,
    /// Mean ISPU of the view
    pub mean_ispu: Option<f64>,
    /// Category of `mean_ispu`
    pub air_quality: Option<AirQuality>,
    /// Mean FFMC of the view
    pub mean_ffmc: Option<f64>,
    /// Dryness band of `mean_ffmc`
    pub ffmc_status: Option<FfmcStatus>,
    /// Rows at Tinggi or Sangat Tinggi
    pub high_risk_rows: usize,
}

impl HeadlineMetrics {
    /// Compute the headline block for `view`, using `full` for the day-over-day delta
    #[must_use]
    pub fn compute(full: &HotspotTable, view: &HotspotTable) -> Self {
        let total_hotspots = view.total_hotspots();
        let yesterday_total = full
            .last_date()
            .and_then(|last| last.checked_sub_days(Days::new(1)))
            .map_or(0, |yesterday| full.on_date(yesterday).total_hotspots());

        let mean_ispu = view.mean(Metric::Ispu);
        let mean_ffmc = view.mean(Metric::Ffmc);

        Self {
            total_hotspots,
            hotspot_delta: clamp_to_i64(total_hotspots) - clamp_to_i64(yesterday_total),
            mean_rainfall: view.mean(Metric::Rainfall),
            mean_temperature: view.mean(Metric::Temperature),
            mean_ispu,
            air_quality: mean_ispu.map(AirQuality::from_ispu),
            mean_ffmc,
            ffmc_status: mean_ffmc.map(FfmcStatus::from_ffmc),
            high_risk_rows: view.high_risk_rows(),
        }
    }
}

fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Expected direction of a quantity over the coming days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Meningkat
    Rising,
    /// Menurun
    Falling,
}

impl Trend {
    /// Indonesian label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Trend::Rising => "Meningkat",
            Trend::Falling => "Menurun",
        }
    }
}

/// Seasonal heuristic forecast plus trailing averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalOutlook {
    /// Season on `today`
    pub season: Season,
    /// Hotspots rise through the dry season and fall through the wet one
    pub hotspot_trend: Trend,
    /// Opposite of `hotspot_trend`
    pub rainfall_trend: Trend,
    /// Mean of the daily hotspot totals over the trailing days
    pub recent_mean_hotspots: Option<f64>,
    /// Mean of the daily mean rainfall over the trailing days
    pub recent_mean_rainfall: Option<f64>,
}

impl SeasonalOutlook {
    /// Outlook for `today` from the last [`OUTLOOK_TRAILING_DAYS`] days of `view`
    #[must_use]
    pub fn compute(today: NaiveDate, view: &HotspotTable) -> Self {
        let season = current_season(today);
        let (hotspot_trend, rainfall_trend) = match season {
            Season::Dry => (Trend::Rising, Trend::Falling),
            Season::Wet => (Trend::Falling, Trend::Rising),
        };

        let daily = view.daily_summary();
        let trailing = &daily[daily.len().saturating_sub(OUTLOOK_TRAILING_DAYS)..];
        let days = trailing.len() as f64;
        let (recent_mean_hotspots, recent_mean_rainfall) = if trailing.is_empty() {
            (None, None)
        } else {
            (
                Some(trailing.iter().map(|d| d.hotspot_total as f64).sum::<f64>() / days),
                Some(trailing.iter().map(|d| d.mean_rainfall).sum::<f64>() / days),
            )
        };

        Self {
            season,
            hotspot_trend,
            rainfall_trend,
            recent_mean_hotspots,
            recent_mean_rainfall,
        }
    }
}
