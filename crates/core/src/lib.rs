//! Pontianak Hotspot Dashboard Core
//!
//! Synthesizes mock fire-weather data for the six districts of Kota Pontianak
//! (West Kalimantan, Indonesia) and derives the views a monitoring dashboard
//! charts: filtered tables, daily and per-district aggregates, risk-level
//! distributions, a correlation matrix, headline metrics and a seasonal
//! outlook.
//!
//! ## Data model
//!
//! One [`HotspotRecord`] per (date, district). Weather variables are a
//! seasonal base (Kemarau April-October, Hujan November-March) plus Gaussian
//! noise from an injected [`NoiseSource`]; FFMC, the composite risk score and
//! ISPU are derived from them. A seeded source makes runs reproducible.
//!
//! ```
//! use chrono::NaiveDate;
//! use hotspot_core::{Area, DateWindow, GaussianNoise, Season, SeriesGenerator, TableFilter};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let window = DateWindow::around(today, 30, 7).unwrap();
//! let table = SeriesGenerator::pontianak()
//!     .generate_window(&window, &Area::ALL, &mut GaussianNoise::seeded(42));
//!
//! let dry = table.filter(&TableFilter::new().with_season(Season::Dry));
//! assert!(dry.iter().all(|r| r.is_dry_season()));
//! ```

// Core types and utilities
pub mod core_types;

// Generation, views and caching
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod table;

// Re-export core types
pub use core_types::{Area, Coordinates, HotspotRecord, Metric, RiskLevel, Season};
pub use core_types::{AirQuality, FfmcStatus};
pub use core_types::{FixedDeviation, GaussianNoise, NoiseSource};

// Re-export generation and views
pub use cache::{GenerationCache, GenerationKey};
pub use config::GeneratorConfig;
pub use dashboard::{HeadlineMetrics, SeasonalOutlook, Trend};
pub use error::{HotspotError, Result};
pub use generator::{DateWindow, SeasonalProfile, SeriesGenerator};
pub use table::{CorrelationMatrix, HotspotTable, TableFilter};
