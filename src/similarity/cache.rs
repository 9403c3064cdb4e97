// src/similarity/cache.rs
//! Memo table for similarity scores keyed by unordered string pairs.

use super::Similarity;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// An unordered pair of strings. `PairKey::new(a, b) == PairKey::new(b, a)`.
///
/// Holds shared handles, so building a key from already-shared items only
/// bumps reference counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    low: Arc<str>,
    high: Arc<str>,
}

impl PairKey {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        Self::from_shared(&Arc::from(a), &Arc::from(b))
    }

    #[must_use]
    pub fn from_shared(a: &Arc<str>, b: &Arc<str>) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: Arc::clone(low),
            high: Arc::clone(high),
        }
    }

    #[must_use]
    pub fn low(&self) -> &str {
        &self.low
    }

    #[must_use]
    pub fn high(&self) -> &str {
        &self.high
    }
}

/// Hit/miss counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// Memoizes a [`Similarity`] metric for the lifetime of one grouping run.
///
/// The metric is always invoked with the pair in key order, so `lookup(a, b)`
/// and `lookup(b, a)` agree even if the metric itself is not symmetric.
/// Entries are never evicted; memory grows with the number of distinct pairs.
pub struct SimilarityCache<S> {
    metric: S,
    memo: DashMap<PairKey, u8>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<S: Similarity> SimilarityCache<S> {
    #[must_use]
    pub fn new(metric: S) -> Self {
        Self {
            metric,
            memo: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Returns the score for the unordered pair, computing it on first use.
    ///
    /// Copies both strings into the key; hot loops should intern their items
    /// once and call [`lookup_shared`](Self::lookup_shared).
    pub fn lookup(&self, a: &str, b: &str) -> u8 {
        self.lookup_shared(&Arc::from(a), &Arc::from(b))
    }

    /// Like [`lookup`](Self::lookup) for interned items; never allocates on a hit.
    ///
    /// Safe to call from many threads. The shard lock is held while a missing
    /// score is computed, so the metric runs once per key.
    pub fn lookup_shared(&self, a: &Arc<str>, b: &Arc<str>) -> u8 {
        let key = PairKey::from_shared(a, b);

        if let Some(score) = self.memo.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *score;
        }

        match self.memo.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let score = self.metric.score(entry.key().low(), entry.key().high());
                entry.insert(score);
                score
            }
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.memo.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}
