//! Property and scenario tests for the synthetic series generator
//!
//! These cover the table-wide invariants (bounds, bucketing, row counts,
//! seasonality, reproducibility) over many seeds and a full calendar year.

use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDate};
use hotspot_core::core_types::risk::RiskFactors;
use hotspot_core::{
    core_types::climate_oscillation, Area, DateWindow, FixedDeviation, GaussianNoise, HotspotRecord,
    HotspotTable, RiskLevel, Season, SeriesGenerator,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A whole year so both seasons and every oscillation phase are visited
fn year_table(seed: u64) -> HotspotTable {
    let window = DateWindow::new(day(2025, 1, 1), day(2025, 12, 31)).unwrap();
    SeriesGenerator::pontianak().generate_window(
        &window,
        &Area::ALL,
        &mut GaussianNoise::seeded(seed),
    )
}

#[test]
fn test_clamped_fields_stay_in_bounds() {
    for seed in 0..8 {
        let table = year_table(seed);
        for r in table.iter() {
            assert!((40.0..=95.0).contains(&*r.humidity), "humidity {:?}", r);
            assert!((20.0..=95.0).contains(&r.ffmc), "ffmc {:?}", r);
            assert!(*r.rainfall >= 0.0, "rainfall {:?}", r);
            assert!(*r.wind_speed >= 0.0, "wind speed {:?}", r);
            assert!(
                *r.wind_direction >= 0.0 && *r.wind_direction < 360.0,
                "wind direction {:?}",
                r
            );
            assert!(r.risk_score >= 0.0);
            // hotspot_count and ispu are unsigned; make sure they are plausible
            assert!(r.hotspot_count < 200);
            assert!(r.ispu < 400);
        }
    }
}

#[test]
fn test_risk_level_is_bucket_of_score() {
    let table = year_table(17);
    for r in table.iter() {
        assert_eq!(r.risk_level, RiskLevel::from_score(r.risk_score));
    }

    // Sorting by score never lowers the risk rank
    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by(|a, b| a.risk_score.total_cmp(&b.risk_score));
    assert!(rows
        .windows(2)
        .all(|w| w[0].risk_level.rank() <= w[1].risk_level.rank()));
}

#[test]
fn test_risk_score_recomputes_from_row() {
    let table = year_table(23);
    for r in table.iter().take(200) {
        let score = RiskFactors {
            hotspot_count: r.hotspot_count,
            rainfall: r.rainfall,
            temperature: r.temperature,
            ffmc: r.ffmc,
            wind_speed: r.wind_speed,
        }
        .score();
        assert_eq!(score, r.risk_score);
    }
}

#[test]
fn test_row_count_is_dates_times_areas() {
    let generator = SeriesGenerator::pontianak();
    let mut noise = GaussianNoise::seeded(1);
    for past_days in [0, 1, 7, 30, 90] {
        let window = DateWindow::around(day(2026, 10, 16), past_days, 7).unwrap();
        let table = generator.generate_window(&window, &Area::ALL, &mut noise);
        assert_eq!(table.len(), window.len_days() * 6);
        assert_eq!(window.len_days(), past_days as usize + 8);
    }

    let table = generator.generate(
        &[day(2026, 2, 1), day(2026, 2, 2)],
        &[Area::Kota],
        &mut noise,
    );
    assert_eq!(table.len(), 2);
}

#[test]
fn test_one_row_per_date_and_area() {
    let table = year_table(2);
    let mut keys: Vec<_> = table.iter().map(|r| (r.date, r.area)).collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before);
}

#[test]
fn test_season_follows_month_in_any_year() {
    for year in [2019, 2024, 2031] {
        let window = DateWindow::new(day(year, 1, 1), day(year, 12, 31)).unwrap();
        let mut noise = FixedDeviation::zero();
        let table = SeriesGenerator::pontianak().generate_window(&window, &Area::ALL, &mut noise);
        for r in table.iter() {
            let month = r.date.month();
            assert_eq!(r.is_dry_season(), (4..=10).contains(&month), "{}", r.date);
            assert_eq!(r.season_label(), if r.is_dry_season() { "Kemarau" } else { "Hujan" });
        }
    }
}

#[test]
fn test_oscillation_shared_by_all_areas_of_a_day() {
    let table = year_table(3);
    for date in table.dates() {
        let expected = climate_oscillation(date);
        assert!(table
            .on_date(date)
            .iter()
            .all(|r| r.climate_oscillation == expected));
    }
}

#[test]
fn test_seeded_runs_are_bit_identical() {
    let a = year_table(1234);
    let b = year_table(1234);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.hotspot_count, y.hotspot_count);
        assert_eq!(x.rainfall.to_bits(), y.rainfall.to_bits());
        assert_eq!(x.temperature.to_bits(), y.temperature.to_bits());
        assert_eq!(x.wind_direction.to_bits(), y.wind_direction.to_bits());
        assert_eq!(x.risk_score.to_bits(), y.risk_score.to_bits());
        assert_eq!(x.ispu, y.ispu);
    }
    assert_ne!(a, year_table(4321));
}

#[test]
fn test_single_july_day_is_all_dry() {
    let table = SeriesGenerator::pontianak().generate(
        &[day(2026, 7, 14)],
        &Area::ALL,
        &mut GaussianNoise::seeded(7),
    );
    assert_eq!(table.len(), 6);
    assert!(table.iter().all(HotspotRecord::is_dry_season));
    assert!(table.iter().all(|r| r.season_label() == "Kemarau"));
    assert_eq!(table.areas(), Area::ALL.to_vec());
}

#[test]
fn test_december_urban_area_without_noise() {
    let date = day(2026, 12, 10);
    let osc = climate_oscillation(date);
    let table = SeriesGenerator::pontianak().generate(
        &[date],
        &[Area::Kota],
        &mut FixedDeviation::zero(),
    );
    let row = &table.records()[0];

    assert_eq!(row.season, Season::Wet);
    // Wet-season baseline ignores the urban multiplier
    assert_eq!(row.hotspot_count, (8.0 + osc * 5.0) as u32);
    assert_relative_eq!(*row.rainfall, (280.0 + osc * 80.0_f64).max(0.0), epsilon = 1e-9);
    assert_eq!(*row.wind_direction, 240.0);
    assert_eq!(*row.humidity, 85.0);
    assert_eq!(row.coordinates, Area::Kota.coordinates());
}

#[test]
fn test_risk_level_boundaries() {
    assert_eq!(RiskLevel::from_score(75.0), RiskLevel::SangatTinggi);
    assert_eq!(RiskLevel::from_score(70.0), RiskLevel::Tinggi);
    assert_eq!(RiskLevel::from_score(50.0), RiskLevel::Sedang);
    assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Rendah);
    assert_eq!(RiskLevel::from_score(70.0 + f64::EPSILON * 100.0), RiskLevel::SangatTinggi);
}

#[test]
fn test_extreme_noise_clamps_exactly_to_zero() {
    let table = SeriesGenerator::pontianak().generate(
        &[day(2026, 8, 1), day(2026, 12, 1)],
        &Area::ALL,
        &mut FixedDeviation::new(-10.0),
    );
    for r in table.iter() {
        // 3.5 - 12 and 2.8 - 12 are both negative
        assert_eq!(*r.wind_speed, 0.0);
        assert!(r.wind_speed.is_sign_positive());
        assert_eq!(r.hotspot_count, 0);
        assert_eq!(*r.humidity, 40.0);
    }
}

#[test]
fn test_dry_season_is_riskier_on_average() {
    let table = year_table(99);
    let seasons = table.seasonal_summary();
    let dry = seasons.iter().find(|s| s.season == Season::Dry).unwrap();
    let wet = seasons.iter().find(|s| s.season == Season::Wet).unwrap();
    assert!(dry.mean_hotspots > wet.mean_hotspots);
    assert!(dry.mean_rainfall < wet.mean_rainfall);
    assert_eq!(dry.rows + wet.rows, table.len());
}
