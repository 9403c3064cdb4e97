// src/group/mod.rs
//! Connected-component grouping of matched items.
//!
//! Qualifying pairs become edges of an undirected [`MatchGraph`]; each
//! connected component of that graph is one [`Group`].

pub mod union_find;

use crate::matcher::ScoredPair;
use serde::Serialize;
use std::collections::HashMap;
use union_find::UnionFind;

/// One connected component, members listed in node order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Group {
    pub members: Vec<String>,
}

impl Group {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.members.iter().any(|m| m == item)
    }
}

/// An edge between two node indices, keeping the score for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub score: u8,
}

/// Undirected graph of items. Nodes are distinct item values, indexed in
/// order of first insertion.
#[derive(Debug, Clone, Default)]
pub struct MatchGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl MatchGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` if absent and returns its index.
    pub fn add_node(&mut self, item: &str) -> usize {
        if let Some(&idx) = self.index.get(item) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(item.to_string());
        self.index.insert(item.to_string(), idx);
        idx
    }

    /// Adds both endpoints and an edge between them. Equal values collapse
    /// to one node, so the edge is a self-loop that joins nothing.
    pub fn add_edge(&mut self, a: &str, b: &str, score: u8) {
        let from = self.add_node(a);
        let to = self.add_node(b);
        self.edges.push(Edge { from, to, score });
    }

    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn node_index(&self, item: &str) -> Option<usize> {
        self.index.get(item).copied()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Connected components, ordered by their first node.
    #[must_use]
    pub fn components(&self) -> Vec<Group> {
        let mut uf = UnionFind::new(self.nodes.len());
        for edge in &self.edges {
            uf.union(edge.from, edge.to);
        }

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Group> = Vec::new();

        for (idx, node) in self.nodes.iter().enumerate() {
            let root = uf.find(idx);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Group {
                    members: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].members.push(node.clone());
        }

        groups
    }
}

/// Builds the graph for a run.
///
/// With `isolated` set, every distinct value in it becomes a node first (in
/// input order), so items without any match surface as singleton groups.
#[must_use]
pub fn build_graph(pairs: &[ScoredPair], isolated: Option<&[String]>) -> MatchGraph {
    let mut graph = MatchGraph::new();
    if let Some(items) = isolated {
        for item in items {
            graph.add_node(item);
        }
    }
    for pair in pairs {
        graph.add_edge(&pair.left, &pair.right, pair.score);
    }
    graph
}

/// Groups the items touched by `pairs` into connected components.
#[must_use]
pub fn build_groups(pairs: &[ScoredPair]) -> Vec<Group> {
    build_graph(pairs, None).components()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> ScoredPair {
        ScoredPair {
            left: a.to_string(),
            right: b.to_string(),
            score: 90,
        }
    }

    fn members(groups: &[Group]) -> Vec<Vec<&str>> {
        groups
            .iter()
            .map(|g| g.members.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(build_groups(&[]).is_empty());
    }

    #[test]
    fn test_single_pair() {
        let groups = build_groups(&[pair("cat", "cats")]);
        assert_eq!(members(&groups), vec![vec!["cat", "cats"]]);
    }

    #[test]
    fn test_transitive_merge() {
        let groups = build_groups(&[pair("a", "b"), pair("x", "y"), pair("b", "c")]);
        assert_eq!(members(&groups), vec![vec!["a", "b", "c"], vec!["x", "y"]]);
    }

    #[test]
    fn test_bridge_joins_late() {
        let groups = build_groups(&[pair("a", "b"), pair("x", "y"), pair("b", "x")]);
        assert_eq!(members(&groups), vec![vec!["a", "b", "x", "y"]]);
    }

    #[test]
    fn test_duplicate_value_collapses() {
        let groups = build_groups(&[pair("abc", "abc")]);
        assert_eq!(members(&groups), vec![vec!["abc"]]);
    }

    #[test]
    fn test_isolated_included() {
        let items: Vec<String> = ["cat", "cats", "dog"].iter().map(ToString::to_string).collect();
        let graph = build_graph(&[pair("cat", "cats")], Some(&items));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            members(&graph.components()),
            vec![vec!["cat", "cats"], vec!["dog"]]
        );
    }

    #[test]
    fn test_isolated_dedups_values() {
        let items: Vec<String> = ["q", "q", "r"].iter().map(ToString::to_string).collect();
        let graph = build_graph(&[], Some(&items));
        assert_eq!(members(&graph.components()), vec![vec!["q"], vec!["r"]]);
    }

    #[test]
    fn test_node_index() {
        let graph = build_graph(&[pair("m", "n")], None);
        assert_eq!(graph.node_index("n"), Some(1));
        assert_eq!(graph.node_index("zz"), None);
        assert!(graph.components()[0].contains("m"));
    }
}
