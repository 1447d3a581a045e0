//! Group-by and summary statistics over a table view
//!
//! Means over an empty selection are `None` rather than NaN. Grouped outputs
//! are ordered: dates ascending, areas and seasons in registry order.

use crate::core_types::area::{Area, Coordinates};
use crate::core_types::record::{HotspotRecord, Metric};
use crate::core_types::risk::RiskLevel;
use crate::core_types::season::Season;
use crate::core_types::units::Degrees;
use crate::table::HotspotTable;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running sum and count for a mean
#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn get(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Mean of a group known to be non-empty
    fn get_or_nan(self) -> f64 {
        self.get().unwrap_or(f64::NAN)
    }
}

/// Per-day aggregate: hotspots summed, weather averaged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Day
    pub date: NaiveDate,
    /// Sum of hotspot detections across the selected areas
    pub hotspot_total: u64,
    /// Mean rainfall (mm)
    pub mean_rainfall: f64,
    /// Mean temperature (°C)
    pub mean_temperature: f64,
    /// Mean humidity (%)
    pub mean_humidity: f64,
    /// Mean composite risk score
    pub mean_risk_score: f64,
}

#[derive(Default)]
struct DailyAccumulator {
    hotspots: u64,
    rainfall: Mean,
    temperature: Mean,
    humidity: Mean,
    risk_score: Mean,
}

/// Per-district aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSummary {
    /// District
    pub area: Area,
    /// District centroid
    pub coordinates: Coordinates,
    /// Rows contributing
    pub rows: usize,
    /// Sum of hotspot detections
    pub hotspot_total: u64,
    /// Mean rainfall (mm)
    pub mean_rainfall: f64,
    /// Mean composite risk score
    pub mean_risk_score: f64,
    /// Most frequent risk level (ties go to the more severe level)
    pub dominant_risk: RiskLevel,
}

/// Per-season aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    /// Season
    pub season: Season,
    /// Rows contributing
    pub rows: usize,
    /// Mean hotspot detections per row
    pub mean_hotspots: f64,
    /// Mean rainfall (mm)
    pub mean_rainfall: f64,
    /// Mean temperature (°C)
    pub mean_temperature: f64,
}

/// Row counts per risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskLevelCounts {
    counts: [usize; 4],
}

impl RiskLevelCounts {
    /// Count one row
    pub fn record(&mut self, level: RiskLevel) {
        self.counts[usize::from(level.rank())] += 1;
    }

    /// Rows at `level`
    #[must_use]
    pub fn get(&self, level: RiskLevel) -> usize {
        self.counts[usize::from(level.rank())]
    }

    /// Rows counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of rows at `level`, in percent
    #[must_use]
    pub fn share(&self, level: RiskLevel) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.get(level) as f64 * 100.0 / total as f64)
    }

    /// Levels with their counts, lowest level first
    pub fn iter(&self) -> impl Iterator<Item = (RiskLevel, usize)> + '_ {
        RiskLevel::ALL.into_iter().map(|level| (level, self.get(level)))
    }

    /// Most frequent level; ties go to the more severe level
    #[must_use]
    pub fn most_common(&self) -> Option<RiskLevel> {
        if self.total() == 0 {
            return None;
        }
        self.iter()
            .max_by_key(|(level, count)| (*count, level.rank()))
            .map(|(level, _)| level)
    }
}

/// One row of the area × risk-level pivot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRiskRow {
    /// District
    pub area: Area,
    /// Zero-filled counts for that district
    pub counts: RiskLevelCounts,
}

/// One sector of the wind rose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindRoseBin {
    /// Sector start (inclusive)
    pub from: Degrees,
    /// Sector end (exclusive)
    pub to: Degrees,
    /// Rows whose bearing falls in the sector
    pub count: usize,
}

impl WindRoseBin {
    /// 16-point compass label of the sector start
    #[must_use]
    pub fn heading(&self) -> &'static str {
        self.from.compass_point()
    }
}

impl HotspotTable {
    /// Sum of a metric column
    #[must_use]
    pub fn sum(&self, metric: Metric) -> f64 {
        self.iter().map(|r| r.metric(metric)).sum()
    }

    /// Mean of a metric column, `None` on an empty view
    #[must_use]
    pub fn mean(&self, metric: Metric) -> Option<f64> {
        let mut mean = Mean::default();
        for r in self {
            mean.push(r.metric(metric));
        }
        mean.get()
    }

    /// Total hotspot detections (exact integer sum)
    #[must_use]
    pub fn total_hotspots(&self) -> u64 {
        self.iter().map(|r| u64::from(r.hotspot_count)).sum()
    }

    /// Rows at "Tinggi" or "Sangat Tinggi"
    #[must_use]
    pub fn high_risk_rows(&self) -> usize {
        self.iter().filter(|r| r.risk_level.is_high()).count()
    }

    /// Group by date: hotspots summed, weather averaged
    #[must_use]
    pub fn daily_summary(&self) -> Vec<DailySummary> {
        let mut by_date: BTreeMap<NaiveDate, DailyAccumulator> = BTreeMap::new();
        for r in self {
            let acc = by_date.entry(r.date).or_default();
            acc.hotspots += u64::from(r.hotspot_count);
            acc.rainfall.push(*r.rainfall);
            acc.temperature.push(*r.temperature);
            acc.humidity.push(*r.humidity);
            acc.risk_score.push(r.risk_score);
        }

        by_date
            .into_iter()
            .map(|(date, acc)| DailySummary {
                date,
                hotspot_total: acc.hotspots,
                mean_rainfall: acc.rainfall.get_or_nan(),
                mean_temperature: acc.temperature.get_or_nan(),
                mean_humidity: acc.humidity.get_or_nan(),
                mean_risk_score: acc.risk_score.get_or_nan(),
            })
            .collect()
    }

    /// Group by date, mean of one metric
    #[must_use]
    pub fn daily_mean(&self, metric: Metric) -> Vec<(NaiveDate, f64)> {
        let mut by_date: BTreeMap<NaiveDate, Mean> = BTreeMap::new();
        for r in self {
            by_date.entry(r.date).or_default().push(r.metric(metric));
        }
        by_date
            .into_iter()
            .map(|(date, mean)| (date, mean.get_or_nan()))
            .collect()
    }

    /// Group by district
    #[must_use]
    pub fn area_summary(&self) -> Vec<AreaSummary> {
        let groups = self.group_by_area();
        Area::ALL
            .into_iter()
            .filter_map(|area| {
                let rows = groups.get(&area)?;
                let mut rainfall = Mean::default();
                let mut risk = Mean::default();
                let mut levels = RiskLevelCounts::default();
                let mut hotspot_total = 0_u64;
                for r in rows {
                    hotspot_total += u64::from(r.hotspot_count);
                    rainfall.push(*r.rainfall);
                    risk.push(r.risk_score);
                    levels.record(r.risk_level);
                }
                Some(AreaSummary {
                    area,
                    coordinates: area.coordinates(),
                    rows: rows.len(),
                    hotspot_total,
                    mean_rainfall: rainfall.get_or_nan(),
                    mean_risk_score: risk.get_or_nan(),
                    dominant_risk: levels.most_common()?,
                })
            })
            .collect()
    }

    /// Group by season (dry first), seasons with no rows omitted
    #[must_use]
    pub fn seasonal_summary(&self) -> Vec<SeasonSummary> {
        Season::ALL
            .into_iter()
            .filter_map(|season| {
                let mut hotspots = Mean::default();
                let mut rainfall = Mean::default();
                let mut temperature = Mean::default();
                for r in self.iter().filter(|r| r.season == season) {
                    hotspots.push(f64::from(r.hotspot_count));
                    rainfall.push(*r.rainfall);
                    temperature.push(*r.temperature);
                }
                Some(SeasonSummary {
                    season,
                    rows: hotspots.count,
                    mean_hotspots: hotspots.get()?,
                    mean_rainfall: rainfall.get()?,
                    mean_temperature: temperature.get()?,
                })
            })
            .collect()
    }

    /// Value counts of the risk level column
    #[must_use]
    pub fn risk_level_counts(&self) -> RiskLevelCounts {
        let mut counts = RiskLevelCounts::default();
        for r in self {
            counts.record(r.risk_level);
        }
        counts
    }

    /// Area × risk-level pivot, zero-filled, areas present in the view only
    #[must_use]
    pub fn area_risk_matrix(&self) -> Vec<AreaRiskRow> {
        let groups = self.group_by_area();
        Area::ALL
            .into_iter()
            .filter_map(|area| {
                let rows = groups.get(&area)?;
                let mut counts = RiskLevelCounts::default();
                for r in rows {
                    counts.record(r.risk_level);
                }
                Some(AreaRiskRow { area, counts })
            })
            .collect()
    }

    /// Histogram of wind bearings in `bins` equal sectors starting at north
    ///
    /// Returns no sectors when `bins` is zero.
    #[must_use]
    pub fn wind_rose(&self, bins: usize) -> Vec<WindRoseBin> {
        if bins == 0 {
            return Vec::new();
        }
        let width = Degrees::FULL_TURN / bins as f64;
        let mut counts = vec![0_usize; bins];
        for r in self {
            let index = (*r.wind_direction.normalized() / width).floor() as usize;
            counts[index.min(bins - 1)] += 1;
        }
        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| WindRoseBin {
                from: Degrees::new(i as f64 * width),
                to: Degrees::new((i + 1) as f64 * width),
                count,
            })
            .collect()
    }

    fn group_by_area(&self) -> FxHashMap<Area, Vec<&HotspotRecord>> {
        let mut groups: FxHashMap<Area, Vec<&HotspotRecord>> = FxHashMap::default();
        for r in self {
            groups.entry(r.area).or_default().push(r);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::noise::FixedDeviation;
    use crate::generator::{DateWindow, SeriesGenerator};
    use approx::assert_relative_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Noise-free table: every value follows the seasonal formula exactly
    fn flat_table(start: NaiveDate, end: NaiveDate) -> HotspotTable {
        let window = DateWindow::new(start, end).unwrap();
        SeriesGenerator::pontianak().generate_window(
            &window,
            &Area::ALL,
            &mut FixedDeviation::zero(),
        )
    }

    #[test]
    fn test_sum_and_mean() {
        let table = flat_table(day(2026, 12, 1), day(2026, 12, 3));
        // Wet season: every temperature is exactly 26.8
        assert_relative_eq!(table.mean(Metric::Temperature).unwrap(), 26.8, epsilon = 1e-12);
        assert_relative_eq!(table.sum(Metric::SolarRadiation), 350.0 * 18.0, epsilon = 1e-9);
        assert_eq!(
            table.total_hotspots() as f64,
            table.sum(Metric::HotspotCount)
        );
        assert_eq!(HotspotTable::default().mean(Metric::Rainfall), None);
    }

    #[test]
    fn test_daily_summary_groups_by_date() {
        let table = flat_table(day(2026, 7, 1), day(2026, 7, 4));
        let daily = table.daily_summary();
        assert_eq!(daily.len(), 4);
        assert!(daily.windows(2).all(|w| w[0].date < w[1].date));
        for summary in &daily {
            let rows = table.on_date(summary.date);
            assert_eq!(summary.hotspot_total, rows.total_hotspots());
            assert_relative_eq!(summary.mean_humidity, 75.0, epsilon = 1e-12);
            assert_relative_eq!(
                summary.mean_risk_score,
                rows.mean(Metric::RiskScore).unwrap(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_daily_mean_of_metric() {
        let table = flat_table(day(2026, 1, 10), day(2026, 1, 12));
        let ffmc = table.daily_mean(Metric::Ffmc);
        assert_eq!(ffmc.len(), 3);
        assert_eq!(ffmc[0].0, day(2026, 1, 10));
    }

    #[test]
    fn test_area_summary_respects_multiplier() {
        let table = flat_table(day(2026, 8, 1), day(2026, 8, 7));
        let summary = table.area_summary();
        assert_eq!(summary.len(), 6);
        let total = |area: Area| {
            summary
                .iter()
                .find(|s| s.area == area)
                .map(|s| s.hotspot_total)
                .unwrap()
        };
        assert!(total(Area::Kota) < total(Area::Selatan));
        assert!(total(Area::Selatan) < total(Area::Utara));
        assert_eq!(total(Area::Utara), total(Area::Timur));
        assert!(summary.iter().all(|s| s.rows == 7));
    }

    #[test]
    fn test_seasonal_summary_omits_missing_season() {
        let dry_only = flat_table(day(2026, 5, 1), day(2026, 5, 3));
        let seasons = dry_only.seasonal_summary();
        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].season, Season::Dry);
        assert_relative_eq!(seasons[0].mean_temperature, 27.5, epsilon = 1e-12);

        let mixed = flat_table(day(2026, 10, 30), day(2026, 11, 2));
        let seasons = mixed.seasonal_summary();
        assert_eq!(
            seasons.iter().map(|s| (s.season, s.rows)).collect::<Vec<_>>(),
            vec![(Season::Dry, 12), (Season::Wet, 12)]
        );
    }

    #[test]
    fn test_risk_counts_and_pivot_agree() {
        let table = flat_table(day(2026, 9, 1), day(2026, 9, 10));
        let counts = table.risk_level_counts();
        assert_eq!(counts.total(), table.len());

        let pivot = table.area_risk_matrix();
        assert_eq!(pivot.len(), 6);
        for level in RiskLevel::ALL {
            let from_pivot: usize = pivot.iter().map(|row| row.counts.get(level)).sum();
            assert_eq!(from_pivot, counts.get(level), "{level}");
        }
        let shares: f64 = RiskLevel::ALL.iter().filter_map(|l| counts.share(*l)).sum();
        assert_relative_eq!(shares, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_most_common_prefers_severe_on_tie() {
        let mut counts = RiskLevelCounts::default();
        assert_eq!(counts.most_common(), None);
        counts.record(RiskLevel::Sedang);
        counts.record(RiskLevel::Tinggi);
        assert_eq!(counts.most_common(), Some(RiskLevel::Tinggi));
        counts.record(RiskLevel::Sedang);
        assert_eq!(counts.most_common(), Some(RiskLevel::Sedang));
    }

    #[test]
    fn test_wind_rose_bins() {
        // Zero noise: dry-season rows all blow from exactly 120°
        let table = flat_table(day(2026, 6, 1), day(2026, 6, 2));
        let rose = table.wind_rose(16);
        assert_eq!(rose.len(), 16);
        assert_eq!(rose.iter().map(|b| b.count).sum::<usize>(), table.len());
        // 120 / 22.5 = 5.33 -> sector 5 covers [112.5, 135)
        assert_eq!(rose[5].count, table.len());
        assert_eq!(*rose[5].from, 112.5);
        assert_eq!(rose[5].heading(), "ESE");
        assert_eq!(rose[0].heading(), "N");
        assert_eq!(*rose[15].to, 360.0);
        assert!(table.wind_rose(0).is_empty());
    }
}
