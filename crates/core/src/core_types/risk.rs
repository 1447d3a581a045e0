//! Fire-risk arithmetic shared by the generator and the report layer
//!
//! The composite score is a weighted sum of five clamped sub-terms:
//!
//! ```text
//! score = 0.35·hotspots
//!       + 0.25·max(0, 100 − rainfall/3)
//!       + 0.15·max(0, temperature − 26)
//!       + 0.15·max(0, FFMC − 40)
//!       + 0.10·max(0, wind − 2)
//! ```
//!
//! and is bucketed into four Indonesian risk levels.

use crate::core_types::units::{Celsius, MetersPerSecond, Millimeters};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk-level boundaries on the composite score.
///
/// Boundaries are exclusive from below: a score must be strictly greater than
/// the threshold to enter the higher bucket, so a score of exactly 50.0 is
/// still "Sedang".
pub mod risk_thresholds {
    /// Above this: "Sedang"
    pub const SEDANG: f64 = 30.0;

    /// Above this: "Tinggi"
    pub const TINGGI: f64 = 50.0;

    /// Above this: "Sangat Tinggi"
    pub const SANGAT_TINGGI: f64 = 70.0;
}

/// Lower and upper clamp of the fine fuel moisture code
pub const FFMC_RANGE: (f64, f64) = (20.0, 95.0);

/// Categorical fire-risk level, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score ≤ 30
    Rendah,
    /// 30 < score ≤ 50
    Sedang,
    /// 50 < score ≤ 70
    Tinggi,
    /// Score > 70
    #[serde(rename = "Sangat Tinggi")]
    SangatTinggi,
}

impl RiskLevel {
    /// All levels, lowest first
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Rendah,
        RiskLevel::Sedang,
        RiskLevel::Tinggi,
        RiskLevel::SangatTinggi,
    ];

    /// Bucket a composite score (first match wins, evaluated high to low)
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s > risk_thresholds::SANGAT_TINGGI => RiskLevel::SangatTinggi,
            s if s > risk_thresholds::TINGGI => RiskLevel::Tinggi,
            s if s > risk_thresholds::SEDANG => RiskLevel::Sedang,
            _ => RiskLevel::Rendah,
        }
    }

    /// Ordinal rank, 0 for Rendah up to 3 for Sangat Tinggi
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// "Tinggi" or "Sangat Tinggi"
    #[must_use]
    pub fn is_high(self) -> bool {
        self >= RiskLevel::Tinggi
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Rendah => "Rendah",
            RiskLevel::Sedang => "Sedang",
            RiskLevel::Tinggi => "Tinggi",
            RiskLevel::SangatTinggi => "Sangat Tinggi",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Fine Fuel Moisture Code proxy
///
/// `clamp(60 + 0.8·hotspots − 0.1·rainfall, 20, 95)`. Higher means drier
/// litter. This is a synthetic stand-in, not the Canadian FWI recurrence.
#[must_use]
pub fn fine_fuel_moisture_code(hotspot_count: u32, rainfall: Millimeters) -> f64 {
    (60.0 + f64::from(hotspot_count) * 0.8 - *rainfall * 0.1).clamp(FFMC_RANGE.0, FFMC_RANGE.1)
}

/// Inputs of the composite risk score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactors {
    /// Hotspot detections for the cell
    pub hotspot_count: u32,
    /// Daily rainfall
    pub rainfall: Millimeters,
    /// Air temperature
    pub temperature: Celsius,
    /// Fine fuel moisture code
    pub ffmc: f64,
    /// Wind speed
    pub wind_speed: MetersPerSecond,
}

impl RiskFactors {
    /// Weighted composite score
    #[must_use]
    pub fn score(&self) -> f64 {
        f64::from(self.hotspot_count) * 0.35
            + (100.0 - *self.rainfall / 3.0).max(0.0) * 0.25
            + self.temperature.excess_over(26.0) * 0.15
            + (self.ffmc - 40.0).max(0.0) * 0.15
            + (*self.wind_speed - 2.0).max(0.0) * 0.10
    }
}

/// Noise-free ISPU (air pollution index) baseline: `45 + 1.2·hotspots`
#[must_use]
pub fn ispu_baseline(hotspot_count: u32) -> f64 {
    45.0 + f64::from(hotspot_count) * 1.2
}
