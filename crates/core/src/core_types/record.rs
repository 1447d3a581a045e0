//! One synthetic observation per (date, area)

use crate::core_types::area::{Area, Coordinates};
use crate::core_types::risk::RiskLevel;
use crate::core_types::season::Season;
use crate::core_types::units::{
    Celsius, Degrees, MetersPerSecond, Millimeters, Percent, WattsPerSquareMeter,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single row of the hotspot table
///
/// Rows are produced by [`SeriesGenerator`](crate::generator::SeriesGenerator)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// District
    pub area: Area,
    /// District centroid, copied from the registry
    pub coordinates: Coordinates,
    /// Dry or wet season of `date`
    pub season: Season,
    /// Synthetic ENSO driver for `date` (shared by every area that day)
    pub climate_oscillation: f64,
    /// Satellite hotspot detections
    pub hotspot_count: u32,
    /// Daily rainfall, ≥ 0
    pub rainfall: Millimeters,
    /// Mean shortwave irradiance
    pub solar_radiation: WattsPerSquareMeter,
    /// Mean wind speed, ≥ 0
    pub wind_speed: MetersPerSecond,
    /// Prevailing wind bearing in `[0, 360)`
    pub wind_direction: Degrees,
    /// Mean air temperature
    pub temperature: Celsius,
    /// Relative humidity in `[40, 95]`
    pub humidity: Percent,
    /// Fine fuel moisture code in `[20, 95]`
    pub ffmc: f64,
    /// Composite risk score
    pub risk_score: f64,
    /// Bucket of `risk_score`
    pub risk_level: RiskLevel,
    /// Air pollution index, ≥ 0
    pub ispu: u32,
}

impl HotspotRecord {
    /// True between April and October
    #[must_use]
    pub fn is_dry_season(&self) -> bool {
        self.season.is_dry()
    }

    /// "Kemarau" or "Hujan"
    #[must_use]
    pub fn season_label(&self) -> &'static str {
        self.season.label()
    }

    /// Numeric value of a metric column
    #[must_use]
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::HotspotCount => f64::from(self.hotspot_count),
            Metric::Rainfall => *self.rainfall,
            Metric::SolarRadiation => *self.solar_radiation,
            Metric::WindSpeed => *self.wind_speed,
            Metric::WindDirection => *self.wind_direction,
            Metric::Temperature => *self.temperature,
            Metric::Humidity => *self.humidity,
            Metric::Ffmc => self.ffmc,
            Metric::RiskScore => self.risk_score,
            Metric::Ispu => f64::from(self.ispu),
            Metric::ClimateOscillation => self.climate_oscillation,
        }
    }
}

/// Numeric column selector used by the aggregation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Hotspot detections
    HotspotCount,
    /// Rainfall (mm)
    Rainfall,
    /// Solar radiation (W/m²)
    SolarRadiation,
    /// Wind speed (m/s)
    WindSpeed,
    /// Wind direction (degrees)
    WindDirection,
    /// Temperature (°C)
    Temperature,
    /// Relative humidity (%)
    Humidity,
    /// Fine fuel moisture code
    Ffmc,
    /// Composite risk score
    RiskScore,
    /// Air pollution index
    Ispu,
    /// Synthetic ENSO driver
    ClimateOscillation,
}

impl Metric {
    /// Columns that feed the correlation view of risk drivers
    pub const RISK_FACTORS: [Metric; 6] = [
        Metric::HotspotCount,
        Metric::Rainfall,
        Metric::Temperature,
        Metric::Humidity,
        Metric::WindSpeed,
        Metric::RiskScore,
    ];

    /// Column name as used in exported tables
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Metric::HotspotCount => "hotspot_count",
            Metric::Rainfall => "rainfall_mm",
            Metric::SolarRadiation => "solar_radiation",
            Metric::WindSpeed => "wind_speed",
            Metric::WindDirection => "wind_direction_deg",
            Metric::Temperature => "temperature_c",
            Metric::Humidity => "humidity_pct",
            Metric::Ffmc => "ffmc",
            Metric::RiskScore => "risk_score",
            Metric::Ispu => "ispu",
            Metric::ClimateOscillation => "climate_oscillation",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::noise::FixedDeviation;
    use crate::generator::SeriesGenerator;

    fn july_row() -> HotspotRecord {
        let date = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let table = SeriesGenerator::pontianak().generate(
            &[date],
            &[Area::Timur],
            &mut FixedDeviation::zero(),
        );
        table.records()[0].clone()
    }

    #[test]
    fn test_metric_reads_matching_field() {
        let r = july_row();
        assert_eq!(r.metric(Metric::HotspotCount), f64::from(r.hotspot_count));
        assert_eq!(r.metric(Metric::Rainfall), *r.rainfall);
        assert_eq!(r.metric(Metric::Humidity), 75.0);
        assert_eq!(r.metric(Metric::WindDirection), 120.0);
        assert_eq!(r.metric(Metric::Ispu), f64::from(r.ispu));
        assert_eq!(r.metric(Metric::ClimateOscillation), r.climate_oscillation);
    }

    #[test]
    fn test_season_helpers() {
        let r = july_row();
        assert!(r.is_dry_season());
        assert_eq!(r.season_label(), "Kemarau");
    }

    #[test]
    fn test_metric_column_names() {
        assert_eq!(Metric::Rainfall.to_string(), "rainfall_mm");
        assert_eq!(format!("{:>8}", Metric::Ffmc), "    ffmc");
        assert_eq!(
            serde_json::to_string(&Metric::HotspotCount).unwrap(),
            "\"hotspot_count\""
        );
    }
}
