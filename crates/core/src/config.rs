//! Generator configuration
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change:
//!
//! ```json
//! { "past_days": 60, "seed": 2026, "areas": ["Pontianak Utara", "Pontianak Timur"] }
//! ```

use crate::cache::GenerationKey;
use crate::core_types::area::Area;
use crate::error::{HotspotError, Result};
use crate::generator::{DateWindow, SeasonalProfile, SeriesGenerator};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Days of history before "today" in the default window
pub const DEFAULT_PAST_DAYS: u32 = 30;

/// Days of forecast after "today" in the default window
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Inputs of a generation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Days before today
    pub past_days: u32,
    /// Days after today
    pub forecast_days: u32,
    /// Noise seed; unset means a fresh random table per run
    pub seed: Option<u64>,
    /// Districts to generate, in output order
    pub areas: Vec<Area>,
    /// Seasonal bases and noise scales
    pub profile: SeasonalProfile,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            past_days: DEFAULT_PAST_DAYS,
            forecast_days: DEFAULT_FORECAST_DAYS,
            seed: None,
            areas: Area::ALL.to_vec(),
            profile: SeasonalProfile::pontianak(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HotspotError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!(path = %path.display(), "loaded generator config");
        Ok(config)
    }

    /// Date window around `today`
    pub fn window(&self, today: NaiveDate) -> Result<DateWindow> {
        DateWindow::around(today, self.past_days, self.forecast_days)
    }

    /// Cache key for a run anchored at `today`
    ///
    /// Fails when `areas` names a district twice.
    pub fn generation_key(&self, today: NaiveDate) -> Result<GenerationKey> {
        for (i, area) in self.areas.iter().enumerate() {
            if self.areas[..i].contains(area) {
                return Err(HotspotError::DuplicateArea(*area));
            }
        }
        Ok(GenerationKey {
            window: self.window(today)?,
            areas: self.areas.clone(),
            seed: self.seed,
        })
    }

    /// Generator for the configured profile
    #[must_use]
    pub fn generator(&self) -> SeriesGenerator {
        SeriesGenerator::new(self.profile.clone())
    }
}
