//! Status bands for the fuel-dryness and air-quality indices
//!
//! Both bands use strict lower bounds, evaluated from the most severe
//! category downward, the same way as the risk levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dryness band of a (mean) fine fuel moisture code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FfmcStatus {
    /// FFMC ≤ 50
    Lembab,
    /// 50 < FFMC ≤ 70
    Sedang,
    /// 70 < FFMC ≤ 85
    Kering,
    /// FFMC > 85
    #[serde(rename = "Sangat Kering")]
    SangatKering,
}

impl FfmcStatus {
    /// Band for an FFMC value
    #[must_use]
    pub fn from_ffmc(ffmc: f64) -> Self {
        match ffmc {
            v if v > 85.0 => FfmcStatus::SangatKering,
            v if v > 70.0 => FfmcStatus::Kering,
            v if v > 50.0 => FfmcStatus::Sedang,
            _ => FfmcStatus::Lembab,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FfmcStatus::Lembab => "Lembab",
            FfmcStatus::Sedang => "Sedang",
            FfmcStatus::Kering => "Kering",
            FfmcStatus::SangatKering => "Sangat Kering",
        }
    }
}

impl fmt::Display for FfmcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// ISPU (Indeks Standar Pencemar Udara) category
///
/// Bands follow the Indonesian KLHK scale: 0-50 good, 51-100 moderate,
/// 101-200 unhealthy, 201-300 very unhealthy, above 300 hazardous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AirQuality {
    /// ISPU ≤ 50
    Baik,
    /// 50 < ISPU ≤ 100
    Sedang,
    /// 100 < ISPU ≤ 200
    #[serde(rename = "Tidak Sehat")]
    TidakSehat,
    /// 200 < ISPU ≤ 300
    #[serde(rename = "Sangat Tidak Sehat")]
    SangatTidakSehat,
    /// ISPU > 300
    Berbahaya,
}

impl AirQuality {
    /// Category for an ISPU value
    #[must_use]
    pub fn from_ispu(ispu: f64) -> Self {
        match ispu {
            v if v > 300.0 => AirQuality::Berbahaya,
            v if v > 200.0 => AirQuality::SangatTidakSehat,
            v if v > 100.0 => AirQuality::TidakSehat,
            v if v > 50.0 => AirQuality::Sedang,
            _ => AirQuality::Baik,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AirQuality::Baik => "Baik",
            AirQuality::Sedang => "Sedang",
            AirQuality::TidakSehat => "Tidak Sehat",
            AirQuality::SangatTidakSehat => "Sangat Tidak Sehat",
            AirQuality::Berbahaya => "Berbahaya",
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffmc_bands() {
        assert_eq!(FfmcStatus::from_ffmc(20.0), FfmcStatus::Lembab);
        assert_eq!(FfmcStatus::from_ffmc(50.0), FfmcStatus::Lembab);
        assert_eq!(FfmcStatus::from_ffmc(50.5), FfmcStatus::Sedang);
        assert_eq!(FfmcStatus::from_ffmc(70.0), FfmcStatus::Sedang);
        assert_eq!(FfmcStatus::from_ffmc(85.0), FfmcStatus::Kering);
        assert_eq!(FfmcStatus::from_ffmc(95.0), FfmcStatus::SangatKering);
    }

    #[test]
    fn test_air_quality_bands() {
        assert_eq!(AirQuality::from_ispu(0.0), AirQuality::Baik);
        assert_eq!(AirQuality::from_ispu(50.0), AirQuality::Baik);
        assert_eq!(AirQuality::from_ispu(51.0), AirQuality::Sedang);
        assert_eq!(AirQuality::from_ispu(100.0), AirQuality::Sedang);
        assert_eq!(AirQuality::from_ispu(150.0), AirQuality::TidakSehat);
        assert_eq!(AirQuality::from_ispu(250.0), AirQuality::SangatTidakSehat);
        assert_eq!(AirQuality::from_ispu(301.0), AirQuality::Berbahaya);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FfmcStatus::SangatKering.to_string(), "Sangat Kering");
        assert_eq!(AirQuality::TidakSehat.to_string(), "Tidak Sehat");
    }
}
