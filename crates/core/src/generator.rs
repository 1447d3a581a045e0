//! Synthetic Series Generator
//!
//! Produces one [`HotspotRecord`] per (date, area) from a seasonal profile and
//! an injected noise source. Each row is evaluated independently, except for
//! the climate oscillation which depends on the date only.
//!
//! Evaluation order for one row (noise is drawn in exactly this order):
//!
//! 1. season from the month, oscillation from the day of year
//! 2. hotspots: seasonal base (+ area multiplier in the dry season), N(0, 8)
//! 3. rainfall, N(0, 40), floored at 0
//! 4. solar radiation, N(0, 50)
//! 5. wind speed N(0, 1.2) floored at 0, then direction N(0, 30) wrapped to [0, 360)
//! 6. temperature, N(0, 1.5)
//! 7. humidity, N(0, 8), clamped to [40, 95]
//! 8. FFMC, risk score and level (no noise)
//! 9. ISPU, N(0, 10), floored at 0
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use hotspot_core::core_types::{Area, GaussianNoise};
//! use hotspot_core::generator::{DateWindow, SeriesGenerator};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 7, 20).unwrap();
//! let window = DateWindow::around(today, 30, 7).unwrap();
//! let table = SeriesGenerator::pontianak().generate_window(
//!     &window,
//!     &Area::ALL,
//!     &mut GaussianNoise::seeded(1),
//! );
//! assert_eq!(table.len(), 38 * 6);
//! ```

use crate::core_types::area::Area;
use crate::core_types::noise::NoiseSource;
use crate::core_types::record::HotspotRecord;
use crate::core_types::risk::{fine_fuel_moisture_code, ispu_baseline, RiskFactors, RiskLevel};
use crate::core_types::season::{climate_oscillation, Season};
use crate::core_types::units::{
    Celsius, Degrees, MetersPerSecond, Millimeters, Percent, WattsPerSquareMeter,
};
use crate::error::{HotspotError, Result};
use crate::table::HotspotTable;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Noise-free base values for one season
///
/// Hotspot and rainfall bases move with the climate oscillation:
/// `base + oscillation_gain · osc`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonBase {
    /// Hotspot detections at `osc = 0`
    pub hotspot_base: f64,
    /// Hotspot change per unit of oscillation
    pub hotspot_oscillation_gain: f64,
    /// Rainfall at `osc = 0`
    pub rainfall_base: Millimeters,
    /// Rainfall change (mm) per unit of oscillation
    pub rainfall_oscillation_gain: f64,
    /// Mean irradiance
    pub solar_radiation: WattsPerSquareMeter,
    /// Prevailing wind bearing
    pub wind_direction: Degrees,
    /// Mean wind speed
    pub wind_speed: MetersPerSecond,
    /// Mean temperature
    pub temperature: Celsius,
    /// Mean relative humidity
    pub humidity: Percent,
}

/// Standard deviations of the Gaussian perturbations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseScales {
    /// Hotspot detections
    pub hotspot: f64,
    /// Rainfall (mm)
    pub rainfall: f64,
    /// Irradiance (W/m²)
    pub solar_radiation: f64,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Wind bearing (degrees)
    pub wind_direction: f64,
    /// Temperature (°C)
    pub temperature: f64,
    /// Humidity (percentage points)
    pub humidity: f64,
    /// ISPU points
    pub ispu: f64,
}

/// Regional climate preset driving the generator
///
/// # Example
/// ```
/// use hotspot_core::generator::SeasonalProfile;
///
/// let profile = SeasonalProfile::pontianak();
/// // Dry season hotspot baseline well above the wet season one
/// assert!(profile.dry.hotspot_base > 3.0 * profile.wet.hotspot_base);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonalProfile {
    /// Region name
    pub name: String,
    /// Kemarau (April-October) bases
    pub dry: SeasonBase,
    /// Hujan (November-March) bases
    pub wet: SeasonBase,
    /// Perturbation scales, shared by both seasons
    pub noise: NoiseScales,
    /// Humidity clamp (percentage points)
    pub humidity_range: (f64, f64),
}

impl SeasonalProfile {
    /// Pontianak preset - equatorial wet climate (Af), Kapuas delta peatland
    #[must_use]
    pub fn pontianak() -> Self {
        SeasonalProfile {
            name: "Pontianak".to_string(),
            dry: SeasonBase {
                hotspot_base: 25.0,
                hotspot_oscillation_gain: 15.0,
                // Positive oscillation dries the dry season further
                rainfall_base: Millimeters::new(120.0),
                rainfall_oscillation_gain: -60.0,
                solar_radiation: WattsPerSquareMeter::new(450.0),
                // South-easterlies
                wind_direction: Degrees::new(120.0),
                wind_speed: MetersPerSecond::new(3.5),
                temperature: Celsius::new(27.5),
                humidity: Percent::new(75.0),
            },
            wet: SeasonBase {
                hotspot_base: 8.0,
                hotspot_oscillation_gain: 5.0,
                rainfall_base: Millimeters::new(280.0),
                rainfall_oscillation_gain: 80.0,
                solar_radiation: WattsPerSquareMeter::new(350.0),
                // South-westerlies
                wind_direction: Degrees::new(240.0),
                wind_speed: MetersPerSecond::new(2.8),
                temperature: Celsius::new(26.8),
                humidity: Percent::new(85.0),
            },
            noise: NoiseScales {
                hotspot: 8.0,
                rainfall: 40.0,
                solar_radiation: 50.0,
                wind_speed: 1.2,
                wind_direction: 30.0,
                temperature: 1.5,
                humidity: 8.0,
                ispu: 10.0,
            },
            humidity_range: (40.0, 95.0),
        }
    }

    /// Bases for a season
    #[must_use]
    pub fn for_season(&self, season: Season) -> &SeasonBase {
        match season {
            Season::Dry => &self.dry,
            Season::Wet => &self.wet,
        }
    }
}

impl Default for SeasonalProfile {
    fn default() -> Self {
        Self::pontianak()
    }
}

/// Inclusive range of calendar days
///
/// Deserialization goes through [`DateWindow::new`], so an inverted range in
/// a config or filter file is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateWindowFields")]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unvalidated wire form of a [`DateWindow`]
#[derive(Deserialize)]
struct DateWindowFields {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateWindowFields> for DateWindow {
    type Error = HotspotError;

    fn try_from(fields: DateWindowFields) -> Result<Self> {
        Self::new(fields.start, fields.end)
    }
}

impl DateWindow {
    /// Window from `start` to `end`, both inclusive
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(HotspotError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// `[today − past_days, today + forecast_days]`
    ///
    /// `today` is an explicit argument; nothing here reads the clock.
    pub fn around(today: NaiveDate, past_days: u32, forecast_days: u32) -> Result<Self> {
        let out_of_range = || HotspotError::WindowOutOfRange {
            today,
            past_days,
            forecast_days,
        };
        let start = today
            .checked_sub_days(Days::new(u64::from(past_days)))
            .ok_or_else(out_of_range)?;
        let end = today
            .checked_add_days(Days::new(u64::from(forecast_days)))
            .ok_or_else(out_of_range)?;
        Ok(Self { start, end })
    }

    /// First day
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered
    #[must_use]
    pub fn len_days(&self) -> usize {
        // start <= end by construction, so the difference is non-negative
        (self.end - self.start).num_days() as usize + 1
    }

    /// True when `date` falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Every day of the window in order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Evaluates the seasonal formulas over (date, area) pairs
#[derive(Clone, Debug, Default)]
pub struct SeriesGenerator {
    profile: SeasonalProfile,
}

impl SeriesGenerator {
    /// Generator for a custom profile
    #[must_use]
    pub fn new(profile: SeasonalProfile) -> Self {
        Self { profile }
    }

    /// Generator with the Pontianak preset
    #[must_use]
    pub fn pontianak() -> Self {
        Self::new(SeasonalProfile::pontianak())
    }

    /// Active profile
    #[must_use]
    pub fn profile(&self) -> &SeasonalProfile {
        &self.profile
    }

    /// Generate every day of `window` for `areas`
    pub fn generate_window<N: NoiseSource + ?Sized>(
        &self,
        window: &DateWindow,
        areas: &[Area],
        noise: &mut N,
    ) -> HotspotTable {
        let dates: Vec<NaiveDate> = window.dates().collect();
        self.generate(&dates, areas, noise)
    }

    /// Generate one row per (date, area), dates in the outer loop
    ///
    /// Total over any input: an empty `dates` or `areas` slice yields an
    /// empty table. A district repeated in `areas` is generated once, at its
    /// first position.
    pub fn generate<N: NoiseSource + ?Sized>(
        &self,
        dates: &[NaiveDate],
        areas: &[Area],
        noise: &mut N,
    ) -> HotspotTable {
        let mut distinct: Vec<Area> = Vec::with_capacity(areas.len());
        for &area in areas {
            if !distinct.contains(&area) {
                distinct.push(area);
            }
        }
        let areas = distinct.as_slice();
        let mut records = Vec::with_capacity(dates.len() * areas.len());

        for &date in dates {
            let season = Season::for_date(date);
            let osc = climate_oscillation(date);
            debug!(%date, season = season.label(), osc, "synthesizing day");

            for &area in areas {
                records.push(self.synthesize(date, season, osc, area, noise));
            }
        }

        info!(
            profile = %self.profile.name,
            days = dates.len(),
            areas = areas.len(),
            rows = records.len(),
            "generated hotspot table"
        );
        HotspotTable::from_records(records)
    }

    fn synthesize<N: NoiseSource + ?Sized>(
        &self,
        date: NaiveDate,
        season: Season,
        osc: f64,
        area: Area,
        noise: &mut N,
    ) -> HotspotRecord {
        let base = self.profile.for_season(season);
        let sigma = &self.profile.noise;

        // Area exposure only shapes the dry-season hotspot baseline
        let mut hotspot_base = base.hotspot_base + osc * base.hotspot_oscillation_gain;
        if season.is_dry() {
            hotspot_base *= area.hotspot_multiplier();
        }
        // `as u32` truncates toward zero and saturates negatives at 0
        let hotspot_count = (hotspot_base + noise.gaussian(sigma.hotspot)).max(0.0) as u32;

        let rainfall = Millimeters::new(
            *base.rainfall_base
                + osc * base.rainfall_oscillation_gain
                + noise.gaussian(sigma.rainfall),
        )
        .floor_zero();

        let solar_radiation = WattsPerSquareMeter::new(
            *base.solar_radiation + noise.gaussian(sigma.solar_radiation),
        );

        let wind_speed =
            MetersPerSecond::new(*base.wind_speed + noise.gaussian(sigma.wind_speed)).floor_zero();
        let wind_direction =
            Degrees::new(*base.wind_direction + noise.gaussian(sigma.wind_direction)).normalized();

        let temperature = Celsius::new(*base.temperature + noise.gaussian(sigma.temperature));

        let (humidity_min, humidity_max) = self.profile.humidity_range;
        let humidity = Percent::new(*base.humidity + noise.gaussian(sigma.humidity))
            .clamp_to(humidity_min, humidity_max);

        let ffmc = fine_fuel_moisture_code(hotspot_count, rainfall);
        let risk_score = RiskFactors {
            hotspot_count,
            rainfall,
            temperature,
            ffmc,
            wind_speed,
        }
        .score();
        let risk_level = RiskLevel::from_score(risk_score);

        let ispu = (ispu_baseline(hotspot_count) + noise.gaussian(sigma.ispu)).max(0.0) as u32;

        HotspotRecord {
            date,
            area,
            coordinates: area.coordinates(),
            season,
            climate_oscillation: osc,
            hotspot_count,
            rainfall,
            solar_radiation,
            wind_speed,
            wind_direction,
            temperature,
            humidity,
            ffmc,
            risk_score,
            risk_level,
            ispu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::noise::{FixedDeviation, GaussianNoise};
    use approx::assert_relative_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_around_is_inclusive() {
        let window = DateWindow::around(day(2026, 10, 16), 30, 7).unwrap();
        assert_eq!(window.start(), day(2026, 9, 16));
        assert_eq!(window.end(), day(2026, 10, 23));
        assert_eq!(window.len_days(), 38);
        assert_eq!(window.dates().count(), 38);
        assert!(window.contains(day(2026, 10, 23)));
        assert!(!window.contains(day(2026, 10, 24)));
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        let err = DateWindow::new(day(2026, 5, 2), day(2026, 5, 1)).unwrap_err();
        assert!(matches!(err, HotspotError::InvertedDateRange { .. }));
    }

    #[test]
    fn test_window_deserialize_validates_order() {
        let window: DateWindow =
            serde_json::from_str(r#"{ "start": "2026-05-01", "end": "2026-05-03" }"#).unwrap();
        assert_eq!(window.len_days(), 3);

        let err = serde_json::from_str::<DateWindow>(
            r#"{ "start": "2026-05-02", "end": "2026-05-01" }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("2026-05-02 is after 2026-05-01"));
    }

    #[test]
    fn test_window_out_of_calendar() {
        let err = DateWindow::around(NaiveDate::MAX, 0, 1).unwrap_err();
        assert!(matches!(err, HotspotError::WindowOutOfRange { .. }));
    }

    #[test]
    fn test_zero_noise_dry_season_applies_area_multiplier() {
        let date = day(2026, 8, 10);
        let osc = climate_oscillation(date);
        let table = SeriesGenerator::pontianak().generate(
            &[date],
            &[Area::Kota, Area::Utara, Area::Barat],
            &mut FixedDeviation::zero(),
        );
        let base = 25.0 + osc * 15.0;
        let counts: Vec<u32> = table.iter().map(|r| r.hotspot_count).collect();
        assert_eq!(
            counts,
            vec![(base * 0.6) as u32, (base * 1.3) as u32, base as u32]
        );
    }

    #[test]
    fn test_zero_noise_row_matches_formulas() {
        let date = day(2026, 7, 1);
        let osc = climate_oscillation(date);
        let table = SeriesGenerator::pontianak().generate(
            &[date],
            &[Area::Selatan],
            &mut FixedDeviation::zero(),
        );
        let row = &table.records()[0];

        let hotspots = (25.0 + osc * 15.0) as u32;
        let rainfall = (120.0 - osc * 60.0_f64).max(0.0);
        assert_eq!(row.hotspot_count, hotspots);
        assert_relative_eq!(*row.rainfall, rainfall, epsilon = 1e-9);
        assert_eq!(*row.solar_radiation, 450.0);
        assert_eq!(*row.wind_speed, 3.5);
        assert_eq!(*row.wind_direction, 120.0);
        assert_eq!(*row.temperature, 27.5);
        assert_eq!(*row.humidity, 75.0);

        let ffmc = (60.0 + f64::from(hotspots) * 0.8 - rainfall * 0.1).clamp(20.0, 95.0);
        assert_relative_eq!(row.ffmc, ffmc, epsilon = 1e-9);
        let score = f64::from(hotspots) * 0.35
            + (100.0 - rainfall / 3.0).max(0.0) * 0.25
            + 1.5 * 0.15
            + (ffmc - 40.0).max(0.0) * 0.15
            + 1.5 * 0.10;
        assert_relative_eq!(row.risk_score, score, epsilon = 1e-9);
        assert_eq!(row.risk_level, RiskLevel::from_score(score));
        assert_eq!(row.ispu, (45.0 + f64::from(hotspots) * 1.2) as u32);
    }

    #[test]
    fn test_extreme_negative_noise_clamps_to_zero() {
        let table = SeriesGenerator::pontianak().generate(
            &[day(2026, 1, 15), day(2026, 6, 15)],
            &Area::ALL,
            &mut FixedDeviation::new(-50.0),
        );
        for row in table.iter() {
            assert_eq!(row.hotspot_count, 0);
            assert_eq!(*row.rainfall, 0.0);
            assert_eq!(*row.wind_speed, 0.0);
            assert_eq!(*row.humidity, 40.0);
            assert_eq!(row.ispu, 0);
            assert!((0.0..360.0).contains(&*row.wind_direction));
        }
    }

    #[test]
    fn test_extreme_positive_noise_hits_upper_clamps() {
        let table = SeriesGenerator::pontianak().generate(
            &[day(2026, 9, 1)],
            &Area::ALL,
            &mut FixedDeviation::new(50.0),
        );
        for row in table.iter() {
            assert_eq!(*row.humidity, 95.0);
            assert!((20.0..=95.0).contains(&row.ffmc));
            assert!((0.0..360.0).contains(&*row.wind_direction));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let window = DateWindow::around(day(2026, 3, 20), 30, 7).unwrap();
        let generator = SeriesGenerator::pontianak();
        let a = generator.generate_window(&window, &Area::ALL, &mut GaussianNoise::seeded(99));
        let b = generator.generate_window(&window, &Area::ALL, &mut GaussianNoise::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_area_yields_one_row_per_day() {
        let window = DateWindow::around(day(2026, 10, 16), 30, 7).unwrap();
        let table = SeriesGenerator::pontianak().generate_window(
            &window,
            &[Area::Kota, Area::Utara, Area::Kota],
            &mut GaussianNoise::seeded(1),
        );
        assert_eq!(table.len(), 38 * 2);
        assert_eq!(table.latest().len(), 2);
        assert_eq!(table.areas(), vec![Area::Kota, Area::Utara]);
        let day_one: Vec<Area> = table.records()[..2].iter().map(|r| r.area).collect();
        assert_eq!(day_one, vec![Area::Kota, Area::Utara]);
    }

    #[test]
    fn test_empty_inputs_give_empty_table() {
        let generator = SeriesGenerator::pontianak();
        let mut noise = GaussianNoise::seeded(0);
        assert!(generator.generate(&[], &Area::ALL, &mut noise).is_empty());
        assert!(generator
            .generate(&[day(2026, 7, 1)], &[], &mut noise)
            .is_empty());
    }
}
