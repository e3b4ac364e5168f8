//! Process-wide memoization of loaded datasets.
//!
//! A [`DatasetCache`] is passed explicitly to whoever needs records (the
//! server keeps one in its app state, the CLI creates one per run). Each
//! location is fetched at most once. Every key has its own once-cell, so
//! concurrent first requests for a key share a single download while
//! lookups of other keys proceed.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, OnceCell};
use trace_report_record_models::RecordTable;

use crate::DataUnavailable;
use crate::definition::DatasetDefinition;
use crate::loader::load_records;
use crate::location::DataLocation;
use crate::progress::ProgressCallback;

/// Loaded tables keyed by [`DataLocation::cache_key`].
#[derive(Default)]
pub struct DatasetCache {
    tables: Mutex<BTreeMap<String, Arc<OnceCell<Arc<RecordTable>>>>>,
    fetches: AtomicU64,
}

impl DatasetCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for `location`, loading it on first use.
    ///
    /// Failed loads are not cached.
    ///
    /// # Errors
    ///
    /// Returns [`DataUnavailable`] if the dataset has to be loaded and the
    /// load fails.
    pub async fn get_or_load(
        &self,
        definition: &DatasetDefinition,
        location: &DataLocation,
        progress: &Arc<dyn ProgressCallback>,
    ) -> Result<Arc<RecordTable>, DataUnavailable> {
        let key = location.cache_key();
        let cell = Arc::clone(self.tables.lock().await.entry(key.clone()).or_default());

        if let Some(table) = cell.get() {
            log::debug!("Cache hit for {key}");
            return Ok(Arc::clone(table));
        }

        cell.get_or_try_init(|| async {
            self.fetches.fetch_add(1, Ordering::Relaxed);
            load_records(definition, location, progress).await.map(Arc::new)
        })
        .await
        .map(Arc::clone)
    }

    /// Drops the cached table for `location`, if any. Returns whether a
    /// loaded table was removed.
    pub async fn invalidate(&self, location: &DataLocation) -> bool {
        self.tables
            .lock()
            .await
            .remove(&location.cache_key())
            .is_some_and(|cell| cell.initialized())
    }

    /// Number of loaded tables.
    pub async fn len(&self) -> usize {
        self.tables
            .lock()
            .await
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    /// Whether no table has been loaded yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// How many loads this cache has started, successful or not.
    #[must_use]
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::mpsc;
    use std::time::Duration;

    use super::*;
    use crate::progress::null_progress;
    use crate::registry::default_dataset;

    fn fixture() -> DataLocation {
        DataLocation::File(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample.csv"))
    }

    #[tokio::test]
    async fn repeated_loads_return_the_same_table() {
        let cache = DatasetCache::new();
        let def = default_dataset();
        let progress = null_progress();

        let first = cache.get_or_load(&def, &fixture(), &progress).await.unwrap();
        let second = cache.get_or_load(&def, &fixture(), &progress).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.fetch_count(), 1);
        assert_eq!(cache.len().await, 1);
        assert!(!first.is_empty());
    }

    #[tokio::test]
    async fn concurrent_first_access_fetches_once() {
        let cache = Arc::new(DatasetCache::new());
        let def = Arc::new(default_dataset());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let def = Arc::clone(&def);
                tokio::spawn(async move {
                    cache
                        .get_or_load(&def, &fixture(), &null_progress())
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut tables = Vec::new();
        for handle in handles {
            tables.push(handle.await.unwrap());
        }

        assert_eq!(cache.fetch_count(), 1);
        assert!(tables.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = DatasetCache::new();
        let def = default_dataset();
        let missing = DataLocation::from("/definitely/not/here.csv");

        assert!(cache.get_or_load(&def, &missing, &null_progress()).await.is_err());
        assert!(cache.get_or_load(&def, &missing, &null_progress()).await.is_err());
        assert_eq!(cache.fetch_count(), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn invalidate_forces_a_reload() {
        let cache = DatasetCache::new();
        let def = default_dataset();

        cache.get_or_load(&def, &fixture(), &null_progress()).await.unwrap();
        assert!(cache.invalidate(&fixture()).await);
        assert!(!cache.invalidate(&fixture()).await);
        cache.get_or_load(&def, &fixture(), &null_progress()).await.unwrap();
        assert_eq!(cache.fetch_count(), 2);
    }

    /// Blocks the first `set_message` (the start of a fetch) until released.
    struct HeldFetch {
        started: std::sync::Mutex<Option<mpsc::Sender<()>>>,
        release: std::sync::Mutex<mpsc::Receiver<()>>,
    }

    impl ProgressCallback for HeldFetch {
        fn set_total(&self, _total: u64) {}
        fn inc(&self, _delta: u64) {}
        fn set_message(&self, _msg: String) {
            let started = self.started.lock().unwrap().take();
            if let Some(started) = started {
                started.send(()).unwrap();
                let _ = self.release.lock().unwrap().recv();
            }
        }
        fn finish(&self, _msg: String) {}
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn hits_are_not_blocked_by_another_key_loading() {
        let cache = Arc::new(DatasetCache::new());
        let def = Arc::new(default_dataset());
        cache.get_or_load(&def, &fixture(), &null_progress()).await.unwrap();

        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let held: Arc<dyn ProgressCallback> = Arc::new(HeldFetch {
            started: std::sync::Mutex::new(Some(started_tx)),
            release: std::sync::Mutex::new(release_rx),
        });
        let other = DataLocation::File(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/../fixtures/sample.csv"),
        );

        let slow = {
            let cache = Arc::clone(&cache);
            let def = Arc::clone(&def);
            tokio::spawn(async move { cache.get_or_load(&def, &other, &held).await.map(|_| ()) })
        };
        tokio::task::spawn_blocking(move || started_rx.recv())
            .await
            .unwrap()
            .unwrap();

        let hit = tokio::time::timeout(
            Duration::from_secs(5),
            cache.get_or_load(&def, &fixture(), &null_progress()),
        )
        .await;
        release_tx.send(()).unwrap();

        assert!(hit.is_ok_and(|table| table.is_ok()));
        slow.await.unwrap().unwrap();
        assert_eq!(cache.fetch_count(), 2);
        assert_eq!(cache.len().await, 2);
    }
}
