// src/report/terminal.rs
use crate::group::Group;
use crate::pipeline::RunStats;
use std::fmt::Write;

/// One line per group: `{first, second, third}`.
#[must_use]
pub fn format_text(groups: &[Group]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{{{}}}", group.members.join(", "));
    }
    out
}

/// Human-readable run summary.
#[must_use]
pub fn format_stats(stats: &RunStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "items:            {}", stats.items);
    let _ = writeln!(out, "pairs compared:   {}", stats.pairs_compared);
    let _ = writeln!(out, "qualifying pairs: {}", stats.qualifying_pairs);
    let _ = writeln!(out, "groups:           {}", stats.groups);
    let _ = writeln!(
        out,
        "cache:            {} entries, {} hits, {} misses",
        stats.cache.entries, stats.cache.hits, stats.cache.misses
    );
    let _ = writeln!(out, "duration:         {}ms", stats.duration_ms);
    out
}
