// src/pipeline.rs
//! One complete grouping run: score, build the graph, extract groups.

use crate::config::Config;
use crate::group::{build_graph, Group, MatchGraph};
use crate::matcher::{pair_count, Matcher};
use crate::similarity::{CacheStats, Ratio, Similarity};
use std::time::Instant;
use tracing::info;

/// Counters describing a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub items: usize,
    pub pairs_compared: usize,
    pub qualifying_pairs: usize,
    pub groups: usize,
    pub cache: CacheStats,
    pub duration_ms: u128,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct GroupRun {
    pub graph: MatchGraph,
    pub groups: Vec<Group>,
    pub stats: RunStats,
}

/// Groups `items` with the default metric.
///
/// # Errors
/// Returns error if a worker pool of the configured size cannot be built.
pub fn run(items: &[String], config: &Config) -> anyhow::Result<GroupRun> {
    run_with(Matcher::<Ratio>::new(), items, config)
}

/// Groups `items` with a caller-supplied matcher.
///
/// # Errors
/// Returns error if a worker pool of the configured size cannot be built.
pub fn run_with<S: Similarity>(
    matcher: Matcher<S>,
    items: &[String],
    config: &Config,
) -> anyhow::Result<GroupRun> {
    let start = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;
    info!(workers = pool.current_num_threads(), "starting match pass");

    let pairs = pool.install(|| matcher.find_matches(items, config.threshold));

    let isolated = config.include_isolated.then_some(items);
    let graph = build_graph(&pairs, isolated);
    let groups = graph.components();

    let stats = RunStats {
        items: items.len(),
        pairs_compared: pair_count(items.len()),
        qualifying_pairs: pairs.len(),
        groups: groups.len(),
        cache: matcher.cache_stats(),
        duration_ms: start.elapsed().as_millis(),
    };
    info!(groups = stats.groups, nodes = graph.node_count(), "grouping done");

    Ok(GroupRun {
        graph,
        groups,
        stats,
    })
}
