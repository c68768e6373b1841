// src/resolve/mod.rs

use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

use crate::dataset::{DatasetId, IndexStore, Record};
use crate::error::{ResolveError, Result};
use crate::text::{normalize, title_hint};

pub mod similarity;

/// A fuzzy candidate must score strictly above this to be accepted.
pub const ACCEPT_THRESHOLD: f64 = 0.8;

/// Turns a title hint into one dataset row: exact lookup first, then the best
/// fuzzy candidate over every indexed title.
pub struct Resolver {
    store: IndexStore,
}

impl Resolver {
    pub fn new(store: IndexStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    #[tracing::instrument(level = "debug", skip(self), fields(dataset = %dataset))]
    pub fn resolve(&self, title_hint: &str, dataset: &DatasetId) -> Result<Record> {
        let wanted = normalize(title_hint);
        if wanted.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }

        let index = self.store.get_index(dataset)?;
        if let Some(record) = index.get(&wanted) {
            debug!(title = %wanted, "exact match");
            return Ok(record.clone());
        }

        let not_found = || ResolveError::NotFound {
            hint: title_hint.to_string(),
        };
        match best_candidate(&wanted, index.titles()) {
            Some((title, score)) if score > ACCEPT_THRESHOLD => {
                debug!(%title, score, "fuzzy match");
                index.get(title).cloned().ok_or_else(not_found)
            }
            Some((title, score)) => {
                debug!(%title, score, "best candidate below threshold");
                Err(not_found())
            }
            None => Err(not_found()),
        }
    }

    /// Resolves with the slot value when present, otherwise with the title
    /// extracted from `utterance`.
    pub fn resolve_utterance(
        &self,
        slot: Option<&str>,
        utterance: &str,
        dataset: &DatasetId,
    ) -> Result<Record> {
        self.resolve(&title_hint(slot, utterance), dataset)
    }

    /// Runs [`Resolver::resolve`] on the blocking pool so index builds never
    /// stall the async executor. Dropping the future does not interrupt a
    /// build in progress; it still completes and is cached.
    pub async fn resolve_async(
        self: Arc<Self>,
        title_hint: String,
        dataset: DatasetId,
    ) -> Result<Record> {
        tokio::task::spawn_blocking(move || self.resolve(&title_hint, &dataset))
            .await
            .map_err(|e| ResolveError::Internal(format!("resolve task failed: {}", e)))?
    }
}

/// Highest-scoring title, earliest in `titles` on ties. `None` only when
/// `titles` is empty.
fn best_candidate<'a>(wanted: &str, titles: &'a [String]) -> Option<(&'a str, f64)> {
    let wanted: Vec<char> = wanted.chars().collect();
    titles
        .par_iter()
        .enumerate()
        .map(|(pos, title)| {
            let candidate: Vec<char> = title.chars().collect();
            (pos, similarity::ratio_chars(&wanted, &candidate))
        })
        .reduce_with(|best, next| {
            if next.1 > best.1 || (next.1 == best.1 && next.0 < best.0) {
                next
            } else {
                best
            }
        })
        .map(|(pos, score)| (titles[pos].as_str(), score))
}
