use crate::table_data::data_loader::BikeTables;
use crate::table_data::error::LoadError;
use crate::table_data::source::{SourceKey, TableSource};
use log::{info, warn};
use std::collections::{hash_map::Entry, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Memoizes loaded tables per source.
///
/// A source is read at most once until its entry is invalidated; the cache never
/// re-reads on its own, even if the underlying files change.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: Mutex<HashMap<SourceKey, Arc<BikeTables>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached tables for `source`, loading them on first use.
    pub fn get_or_load(&self, source: &dyn TableSource) -> Result<Arc<BikeTables>, LoadError> {
        let key = source.key();

        {
            let cache = self.lock();
            if let Some(tables) = cache.get(&key) {
                info!("Cache hit for {}", key);
                return Ok(Arc::clone(tables));
            }
        }

        info!("Cache miss for {}. Loading tables.", key);
        // Loading happens outside the lock.
        let loaded = Arc::new(source.load()?);
        info!(
            "Loaded {} daily and {} hourly rows for {}",
            loaded.daily.height(),
            loaded.hourly.height(),
            key
        );

        let mut cache = self.lock();
        match cache.entry(key) {
            // Another caller finished first; keep a single shared copy.
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&loaded));
                Ok(loaded)
            }
        }
    }

    /// Drops the entry for `key`. Returns whether one existed.
    pub fn invalidate(&self, key: &SourceKey) -> bool {
        let removed = self.lock().remove(key).is_some();
        if removed {
            info!("Invalidated cached tables for {}", key);
        }
        removed
    }

    pub fn clear(&self) {
        self.lock().clear();
        info!("Cleared table cache");
    }

    pub fn contains(&self, key: &SourceKey) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SourceKey, Arc<BikeTables>>> {
        // Entries are immutable Arcs, so a poisoned map is still consistent.
        self.tables.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("Table cache lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{daily_raw, hourly_raw};
    use std::cell::Cell;

    struct CountingSource {
        loads: Cell<usize>,
        name: &'static str,
    }

    impl TableSource for CountingSource {
        fn key(&self) -> SourceKey {
            SourceKey::Memory(self.name.to_string())
        }

        fn load(&self) -> Result<BikeTables, LoadError> {
            self.loads.set(self.loads.get() + 1);
            let daily = daily_raw().map_err(|e| LoadError::Processing {
                table: crate::types::table_kind::TableKind::Daily,
                source: e,
            })?;
            let hourly = hourly_raw().map_err(|e| LoadError::Processing {
                table: crate::types::table_kind::TableKind::Hourly,
                source: e,
            })?;
            BikeTables::from_frames(daily, hourly)
        }
    }

    fn counting(name: &'static str) -> CountingSource {
        CountingSource {
            loads: Cell::new(0),
            name,
        }
    }

    #[test]
    fn test_loads_once() -> Result<(), LoadError> {
        let cache = TableCache::new();
        let source = counting("a");

        let first = cache.get_or_load(&source)?;
        let second = cache.get_or_load(&source)?;

        assert_eq!(source.loads.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[test]
    fn test_invalidate_forces_reload() -> Result<(), LoadError> {
        let cache = TableCache::new();
        let source = counting("b");

        cache.get_or_load(&source)?;
        assert!(cache.invalidate(&source.key()));
        assert!(!cache.contains(&source.key()));
        assert!(!cache.invalidate(&source.key()));

        cache.get_or_load(&source)?;
        assert_eq!(source.loads.get(), 2);
        Ok(())
    }

    #[test]
    fn test_sources_are_cached_separately() -> Result<(), LoadError> {
        let cache = TableCache::new();
        let a = counting("a");
        let b = counting("b");

        cache.get_or_load(&a)?;
        cache.get_or_load(&b)?;
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache = TableCache::new();
        let source = crate::table_data::source::CsvSource::new("/nope/day.csv", "/nope/hour.csv");

        assert!(cache.get_or_load(&source).is_err());
        assert!(cache.is_empty());
    }
}
