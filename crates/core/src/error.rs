//! Error type for the input-facing edges of the crate
//!
//! Generation and aggregation never fail. Errors only come from parsing
//! user selections (area and season names, date ranges) and from loading a
//! configuration file.

use crate::core_types::area::Area;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while interpreting external input
#[derive(Debug, Error)]
pub enum HotspotError {
    /// Area name matched none of the six districts
    #[error("unknown area '{0}' (expected one of the six Pontianak districts)")]
    UnknownArea(String),

    /// Season name was neither Kemarau/dry nor Hujan/wet
    #[error("unknown season '{0}' (expected Kemarau or Hujan)")]
    UnknownSeason(String),

    /// Area selection lists the same district more than once
    #[error("area '{0}' is listed more than once")]
    DuplicateArea(Area),

    /// Date range start falls after its end
    #[error("invalid date range: {start} is after {end}")]
    InvertedDateRange {
        /// Requested first day
        start: NaiveDate,
        /// Requested last day
        end: NaiveDate,
    },

    /// Date window does not fit the calendar
    #[error("date window of {past_days} past and {forecast_days} forecast days around {today} is out of range")]
    WindowOutOfRange {
        /// Anchor day
        today: NaiveDate,
        /// Days before the anchor
        past_days: u32,
        /// Days after the anchor
        forecast_days: u32,
    },

    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`GeneratorConfig`](crate::config::GeneratorConfig)
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Crate result alias
pub type Result<T> = std::result::Result<T, HotspotError>;
