// src/report/dot.rs
//! Graphviz rendering of the match graph.
//!
//! Each group becomes a `cluster_N` subgraph so layout engines keep its
//! members together; edges carry the similarity score as a label.

use crate::group::{Group, MatchGraph};
use std::fmt::Write;

/// Formats the graph as an undirected DOT document.
#[must_use]
pub fn format_dot(graph: &MatchGraph, groups: &[Group]) -> String {
    let mut out = String::from("graph levgroups {\n");
    out.push_str("  node [shape=ellipse, fontsize=8];\n");

    for (i, group) in groups.iter().enumerate() {
        let _ = writeln!(out, "  subgraph cluster_{i} {{");
        for member in &group.members {
            if let Some(idx) = graph.node_index(member) {
                let _ = writeln!(out, "    n{idx} [label=\"{}\"];", escape(member));
            }
        }
        out.push_str("  }\n");
    }

    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "  n{} -- n{} [label=\"{}\"];",
            edge.from, edge.to, edge.score
        );
    }

    out.push_str("}\n");
    out
}

fn escape(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out
}
