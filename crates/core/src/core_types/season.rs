//! Equatorial season classification for Pontianak
//!
//! Pontianak sits on the equator and has no temperate seasons; the fire year
//! is split by rainfall instead:
//! - **Kemarau** (dry): April to October, peak hotspot risk July-September
//! - **Hujan** (wet): November to March
//!
//! A slow three-year sinusoid stands in for ENSO (El Niño / La Niña) swings
//! that push a dry season drier or a wet season wetter.

use crate::error::HotspotError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Months (1-based) belonging to the dry season
pub const DRY_MONTHS: RangeInclusive<u32> = 4..=10;

/// Period of the synthetic climate oscillation, in days (about three years)
pub const CLIMATE_CYCLE_DAYS: f64 = 1095.0;

/// Rain-driven season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    /// Musim kemarau (April-October)
    #[serde(rename = "Kemarau")]
    Dry,
    /// Musim hujan (November-March)
    #[serde(rename = "Hujan")]
    Wet,
}

impl Season {
    /// Both seasons, dry first
    pub const ALL: [Season; 2] = [Season::Dry, Season::Wet];

    /// Classify a calendar month (1-12)
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        if DRY_MONTHS.contains(&month) {
            Season::Dry
        } else {
            Season::Wet
        }
    }

    /// Classify a date; the year never matters
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// True for the dry season
    #[must_use]
    pub fn is_dry(self) -> bool {
        self == Season::Dry
    }

    /// Indonesian label used in reports ("Kemarau" / "Hujan")
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Season::Dry => "Kemarau",
            Season::Wet => "Hujan",
        }
    }

    /// One-line advisory shown next to the current season
    #[must_use]
    pub fn advisory(self) -> &'static str {
        match self {
            Season::Dry => "Peningkatan kewaspadaan: risiko kebakaran lebih tinggi",
            Season::Wet => "Musim hujan: risiko kebakaran relatif rendah",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Season {
    type Err = HotspotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kemarau" | "dry" => Ok(Season::Dry),
            "hujan" | "wet" => Ok(Season::Wet),
            _ => Err(HotspotError::UnknownSeason(s.to_string())),
        }
    }
}

/// Season in effect on `today`
///
/// The clock is never read here; callers pass the date they consider "now".
#[must_use]
pub fn current_season(today: NaiveDate) -> Season {
    Season::for_date(today)
}

/// Synthetic ENSO-like driver in `[-1, 1]`
///
/// `sin(2π · day_of_year / 1095)`. Positive values strengthen the dry-season
/// hotspot baseline and weaken dry-season rain.
#[must_use]
pub fn climate_oscillation(date: NaiveDate) -> f64 {
    (TAU * f64::from(date.ordinal()) / CLIMATE_CYCLE_DAYS).sin()
}
