//! Row selection by area, date range and season
//!
//! Unset criteria match everything. An explicitly empty area list matches
//! nothing, same as deselecting every district in a multiselect.

use crate::core_types::area::Area;
use crate::core_types::record::HotspotRecord;
use crate::core_types::season::Season;
use crate::generator::DateWindow;
use serde::{Deserialize, Serialize};

/// Conjunction of optional row criteria
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use hotspot_core::core_types::{Area, Season};
/// use hotspot_core::generator::DateWindow;
/// use hotspot_core::table::TableFilter;
///
/// let filter = TableFilter::new()
///     .with_areas([Area::Utara, Area::Timur])
///     .with_window(DateWindow::new(
///         NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
///     ).unwrap())
///     .with_season(Season::Dry);
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableFilter {
    /// Allowed districts; `None` allows all
    pub areas: Option<Vec<Area>>,
    /// Inclusive date range; `None` allows all
    pub window: Option<DateWindow>,
    /// Season equality; `None` allows both
    pub season: Option<Season>,
}

impl TableFilter {
    /// Filter that matches every row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a set of districts
    pub fn with_areas(mut self, areas: impl IntoIterator<Item = Area>) -> Self {
        self.areas = Some(areas.into_iter().collect());
        self
    }

    /// Restrict to an inclusive date range
    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Restrict to one season
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// True when no criterion is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_none() && self.window.is_none() && self.season.is_none()
    }

    /// Whether `record` passes every set criterion
    #[must_use]
    pub fn matches(&self, record: &HotspotRecord) -> bool {
        self.areas
            .as_ref()
            .is_none_or(|areas| areas.contains(&record.area))
            && self.window.is_none_or(|w| w.contains(record.date))
            && self.season.is_none_or(|s| s == record.season)
    }
}
