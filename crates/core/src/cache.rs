//! Explicit memoization of generated tables
//!
//! The cache is an ordinary value owned by the caller, never a process-wide
//! static. Entries are keyed by every input that shapes a table: the date
//! window, the area list and the noise seed. An unseeded request is cached
//! too, so repeated lookups keep returning the first random draw until the
//! entry is invalidated.

use crate::core_types::area::Area;
use crate::core_types::noise::GaussianNoise;
use crate::generator::{DateWindow, SeriesGenerator};
use crate::table::HotspotTable;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

/// Everything a cached table depends on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenerationKey {
    /// Dates covered
    pub window: DateWindow,
    /// Areas in generation order
    pub areas: Vec<Area>,
    /// Noise seed; `None` for an entropy-backed draw
    pub seed: Option<u64>,
}

impl GenerationKey {
    /// Key for the full six-district registry
    #[must_use]
    pub fn all_areas(window: DateWindow, seed: Option<u64>) -> Self {
        Self {
            window,
            areas: Area::ALL.to_vec(),
            seed,
        }
    }
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to generate
    pub misses: u64,
}

/// Memoizing front of a [`SeriesGenerator`]
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use hotspot_core::cache::{GenerationCache, GenerationKey};
/// use hotspot_core::generator::{DateWindow, SeriesGenerator};
/// use std::sync::Arc;
///
/// let mut cache = GenerationCache::new(SeriesGenerator::pontianak());
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let key = GenerationKey::all_areas(DateWindow::around(today, 30, 7).unwrap(), Some(1));
///
/// let first = cache.get_or_generate(&key);
/// let second = cache.get_or_generate(&key);
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct GenerationCache {
    generator: SeriesGenerator,
    entries: FxHashMap<GenerationKey, Arc<HotspotTable>>,
    stats: CacheStats,
}

impl GenerationCache {
    /// Empty cache in front of `generator`
    #[must_use]
    pub fn new(generator: SeriesGenerator) -> Self {
        Self {
            generator,
            entries: FxHashMap::default(),
            stats: CacheStats::default(),
        }
    }

    /// Wrapped generator
    #[must_use]
    pub fn generator(&self) -> &SeriesGenerator {
        &self.generator
    }

    /// Cached table for `key`, generating it on a miss
    pub fn get_or_generate(&mut self, key: &GenerationKey) -> Arc<HotspotTable> {
        if let Some(table) = self.entries.get(key) {
            self.stats.hits += 1;
            debug!(?key.seed, days = key.window.len_days(), "generation cache hit");
            return Arc::clone(table);
        }

        self.stats.misses += 1;
        debug!(?key.seed, days = key.window.len_days(), "generation cache miss");
        let table = Arc::new(match key.seed {
            Some(seed) => self.generator.generate_window(
                &key.window,
                &key.areas,
                &mut GaussianNoise::seeded(seed),
            ),
            None => self.generator.generate_window(
                &key.window,
                &key.areas,
                &mut GaussianNoise::from_entropy(),
            ),
        });
        self.entries.insert(key.clone(), Arc::clone(&table));
        table
    }

    /// Cached table without generating
    #[must_use]
    pub fn peek(&self, key: &GenerationKey) -> Option<Arc<HotspotTable>> {
        self.entries.get(key).cloned()
    }

    /// Drop one entry; returns whether it was present
    pub fn invalidate(&mut self, key: &GenerationKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every entry (counters are kept)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit/miss counters since construction
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
