// src/matcher.rs
//! Exhaustive pairwise scoring.
//!
//! Every unordered pair of input positions is scored exactly once and the
//! pairs meeting the threshold are kept. Scoring fans out over a rayon pool;
//! results come back in enumeration order regardless of scheduling.

use crate::config::Threshold;
use crate::similarity::{CacheStats, Ratio, Similarity, SimilarityCache};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Two items and their similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredPair {
    pub left: String,
    pub right: String,
    pub score: u8,
}

/// Scores item pairs through a run-scoped [`SimilarityCache`].
pub struct Matcher<S = Ratio> {
    cache: SimilarityCache<S>,
}

impl Matcher<Ratio> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_metric(Ratio)
    }
}

impl Default for Matcher<Ratio> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Similarity> Matcher<S> {
    #[must_use]
    pub fn with_metric(metric: S) -> Self {
        Self {
            cache: SimilarityCache::new(metric),
        }
    }

    /// Returns every pair `(items[i], items[j])`, `i < j`, whose score meets
    /// `threshold`, ordered by `(i, j)`.
    ///
    /// Runs on the current rayon pool; install a sized pool around the call
    /// to bound the worker count.
    #[must_use]
    pub fn find_matches(&self, items: &[String], threshold: Threshold) -> Vec<ScoredPair> {
        let n = items.len();
        debug!(items = n, pairs = pair_count(n), %threshold, "scoring pairs");

        // Intern once so cache keys share these allocations.
        let shared: Vec<Arc<str>> = items.iter().map(|s| Arc::from(s.as_str())).collect();
        let shared = &shared;

        // Parallelise over the first index; each worker owns the inner row,
        // and collect() stitches rows back together in order.
        let matches: Vec<ScoredPair> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                ((i + 1)..n).filter_map(move |j| self.score_pair(&shared[i], &shared[j], threshold))
            })
            .collect();

        debug!(qualifying = matches.len(), cache = ?self.cache.stats(), "scoring done");
        matches
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn score_pair(&self, a: &Arc<str>, b: &Arc<str>, threshold: Threshold) -> Option<ScoredPair> {
        let score = self.cache.lookup_shared(a, b);
        threshold.admits(score).then(|| ScoredPair {
            left: a.to_string(),
            right: b.to_string(),
            score,
        })
    }
}

/// Number of unordered pairs among `n` items.
#[must_use]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Scores `items` with the default metric and a fresh cache.
#[must_use]
pub fn find_matches(items: &[String], threshold: Threshold) -> Vec<ScoredPair> {
    Matcher::new().find_matches(items, threshold)
}
