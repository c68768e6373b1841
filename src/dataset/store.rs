// src/dataset/store.rs

use once_cell::sync::OnceCell;
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
    time::Instant,
};
use tracing::{info, warn};

use super::index::DatasetIndex;
use super::source::{DatasetId, DatasetSource, FsSource};
use crate::error::{ResolveError, Result};

type Slot = Arc<OnceCell<Arc<DatasetIndex>>>;

/// Thread-safe cache of dataset → index, each dataset built independently.
///
/// An index is parsed at most once per id, even when several threads ask for
/// it at the same time. A failed build publishes nothing, so the next caller
/// tries again. Entries are never evicted.
pub struct IndexStore {
    source: Arc<dyn DatasetSource>,
    /// Map: dataset id → slot filled once by the first successful build
    map: RwLock<HashMap<DatasetId, Slot>>,
}

impl IndexStore {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            map: RwLock::new(HashMap::new()),
        }
    }

    /// Store reading datasets straight from disk.
    pub fn from_fs() -> Self {
        Self::new(Arc::new(FsSource))
    }

    /// Return the index for `id`, building it on first use.
    pub fn get_index(&self, id: &DatasetId) -> Result<Arc<DatasetIndex>> {
        // 1) Acquire or insert the per-dataset slot
        let slot = {
            let map_r = self.map.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = map_r.get(id) {
                Arc::clone(slot)
            } else {
                drop(map_r);
                let mut map_w = self.map.write().unwrap_or_else(PoisonError::into_inner);
                Arc::clone(map_w.entry(id.clone()).or_default())
            }
        };

        // 2) Fast-path: already built
        if let Some(index) = slot.get() {
            return Ok(Arc::clone(index));
        }

        // 3) Build under this dataset's slot only; other datasets are not held up
        let index = slot.get_or_try_init(|| self.build(id))?;
        Ok(Arc::clone(index))
    }

    /// `true` once `id` has a fully built index.
    pub fn is_cached(&self, id: &DatasetId) -> bool {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .is_some_and(|slot| slot.get().is_some())
    }

    #[tracing::instrument(level = "info", skip(self), fields(dataset = %id))]
    fn build(&self, id: &DatasetId) -> Result<Arc<DatasetIndex>> {
        let start = Instant::now();

        let reader = self.source.open(id).map_err(|e| {
            warn!(error = %e, "cannot open dataset");
            ResolveError::unavailable(id, e)
        })?;
        let index = DatasetIndex::from_reader(reader).map_err(|e| {
            warn!(error = %e, "cannot parse dataset");
            ResolveError::unavailable(id, e)
        })?;

        info!(titles = index.len(), elapsed = ?start.elapsed(), "built title index");
        Ok(Arc::new(index))
    }
}
