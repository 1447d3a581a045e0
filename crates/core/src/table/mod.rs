//! Immutable hotspot table and its derived views
//!
//! A [`HotspotTable`] is produced once by the generator and never mutated.
//! Filtering and snapshot operations return new tables; aggregations return
//! plain summary values.

pub mod aggregate;
pub mod correlation;
pub mod filter;

pub use aggregate::{
    AreaRiskRow, AreaSummary, DailySummary, RiskLevelCounts, SeasonSummary, WindRoseBin,
};
pub use correlation::CorrelationMatrix;
pub use filter::TableFilter;

use crate::core_types::area::Area;
use crate::core_types::record::HotspotRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::slice;
use tracing::debug;

/// Rows of a generation call, dates in the outer order and areas inner
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotspotTable {
    records: Vec<HotspotRecord>,
}

impl HotspotTable {
    /// Wrap already-built rows
    #[must_use]
    pub fn from_records(records: Vec<HotspotRecord>) -> Self {
        Self { records }
    }

    /// Row count
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow all rows
    #[must_use]
    pub fn records(&self) -> &[HotspotRecord] {
        &self.records
    }

    /// Iterate rows in table order
    pub fn iter(&self) -> slice::Iter<'_, HotspotRecord> {
        self.records.iter()
    }

    /// Distinct dates, ascending
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.records.iter().map(|r| r.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Distinct areas in registry order
    #[must_use]
    pub fn areas(&self) -> Vec<Area> {
        Area::ALL
            .into_iter()
            .filter(|area| self.records.iter().any(|r| r.area == *area))
            .collect()
    }

    /// Earliest date present
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    /// Latest date present
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }

    /// New table with the rows matching `predicate`
    pub fn select(&self, predicate: impl Fn(&HotspotRecord) -> bool) -> HotspotTable {
        HotspotTable::from_records(
            self.records
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
        )
    }

    /// New table with the rows that pass `filter`
    #[must_use]
    pub fn filter(&self, filter: &TableFilter) -> HotspotTable {
        let view = self.select(|r| filter.matches(r));
        debug!(
            source_rows = self.len(),
            view_rows = view.len(),
            "applied table filter"
        );
        view
    }

    /// Rows of a single day
    #[must_use]
    pub fn on_date(&self, date: NaiveDate) -> HotspotTable {
        self.select(|r| r.date == date)
    }

    /// Rows of the latest day present (the "current conditions" map layer)
    #[must_use]
    pub fn latest(&self) -> HotspotTable {
        match self.last_date() {
            Some(date) => self.on_date(date),
            None => HotspotTable::default(),
        }
    }
}

impl<'a> IntoIterator for &'a HotspotTable {
    type Item = &'a HotspotRecord;
    type IntoIter = slice::Iter<'a, HotspotRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
