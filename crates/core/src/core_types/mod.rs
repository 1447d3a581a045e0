//! Core types and utilities

pub mod area;
pub mod indices;
pub mod noise;
pub mod record;
pub mod risk;
pub mod season;
pub mod units;

pub use area::{Area, Coordinates, Exposure};
pub use indices::{AirQuality, FfmcStatus};
pub use noise::{FixedDeviation, GaussianNoise, NoiseSource};
pub use record::{HotspotRecord, Metric};
pub use risk::{RiskFactors, RiskLevel};
pub use season::{climate_oscillation, current_season, Season};
pub use units::*;
