//! Core graph types
//!
//! The include graph is small (hundreds to a few thousand headers), so it is
//! stored directly as an insertion-ordered node table with per-node
//! successor lists. Insertion order is the iteration order everywhere, which
//! keeps traversal results reproducible across runs on identical input.

use std::collections::HashMap;

/// A directed graph of include relationships
///
/// Nodes are file identifiers (paths relative to the scan root). Edges mean
/// "source includes target". Duplicate edges are permitted and preserved in
/// encounter order.
#[derive(Debug, Default, Clone)]
pub struct IncludeGraph {
    nodes: Vec<String>,
    indices: HashMap<String, usize>,
    successors: Vec<Vec<usize>>,
}

impl IncludeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a node identifier, returning its index
    ///
    /// Adding an existing identifier is a no-op that returns the original
    /// index, so files referenced before they are scanned keep one identity.
    pub fn add_node(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.indices.get(id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(id.to_string());
        self.indices.insert(id.to_string(), idx);
        self.successors.push(Vec::new());
        idx
    }

    /// Record that `from` includes `to`, interning both endpoints
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);
        self.successors[from_idx].push(to_idx);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node identifier for an index
    ///
    /// Indices come from this graph, so out-of-range lookups are programming
    /// errors and panic.
    pub fn name(&self, idx: usize) -> &str {
        &self.nodes[idx]
    }

    /// Index of a node identifier, if present
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.indices.get(id).copied()
    }

    /// Successor indices of a node, in encounter order
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }

    /// Node identifiers in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// All edges as (source index, target index) pairs, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = IncludeGraph::new();
        let a = graph.add_node("a.h");
        let a_again = graph.add_node("a.h");

        assert_eq!(a, a_again);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_interns_endpoints() {
        let mut graph = IncludeGraph::new();
        graph.add_edge("a.h", "b.h");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = graph.index_of("a.h").unwrap();
        let b = graph.index_of("b.h").unwrap();
        assert_eq!(graph.successors(a), &[b]);
        // Targets never scanned as sources have no successors
        assert!(graph.successors(b).is_empty());
    }

    #[test]
    fn test_duplicate_edges_preserved() {
        let mut graph = IncludeGraph::new();
        graph.add_edge("a.h", "b.h");
        graph.add_edge("a.h", "b.h");

        assert_eq!(graph.edge_count(), 2);
        let a = graph.index_of("a.h").unwrap();
        assert_eq!(graph.successors(a).len(), 2);
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut graph = IncludeGraph::new();
        graph.add_node("z.h");
        graph.add_node("a.h");
        graph.add_edge("z.h", "m.h");

        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["z.h", "a.h", "m.h"]);
    }

    #[test]
    fn test_edges_iterator() {
        let mut graph = IncludeGraph::new();
        graph.add_edge("a.h", "b.h");
        graph.add_edge("b.h", "c.h");
        graph.add_edge("a.h", "c.h");

        let edges: Vec<(String, String)> = graph
            .edges()
            .map(|(from, to)| (graph.name(from).to_string(), graph.name(to).to_string()))
            .collect();

        assert_eq!(
            edges,
            vec![
                ("a.h".to_string(), "b.h".to_string()),
                ("a.h".to_string(), "c.h".to_string()),
                ("b.h".to_string(), "c.h".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = IncludeGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.index_of("a.h").is_none());
    }
}
