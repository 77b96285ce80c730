//! Graph model and traversal operations
//!
//! Provides the in-memory graph built from tabular edge lists and the
//! algorithms that run against it:
//! - Dijkstra shortest-path search (weighted, non-negative)
//! - Bellman-Ford relaxation with negative-cycle detection
//! - BFS/DFS level and depth traversals with cycle detection
//! - Batch driver for many-origin / many-pair queries

pub mod algos;
pub mod batch;
pub mod types;

pub use algos::bellman_ford::{relax_all, Relaxation};
pub use algos::bfs::breadth_first;
pub use algos::dfs::depth_first;
pub use algos::dijkstra::{shortest_path, shortest_path_tree};
pub use algos::path::{PredecessorEntry, ShortestPathTree};
pub use batch::{collect_routes, routes_for_pairs, traversal_reports, TraversalReport};
pub use types::{
    Algorithm, BackEdge, BatchOptions, Cost, PathResult, PathStep, TraversalResult,
};

use std::collections::HashMap;

/// A directed connection between two nodes carrying a weight and an
/// optional descriptive label (street name, flight number, shared genre)
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub label: Option<String>,
}

/// In-memory weighted graph keyed by opaque string node ids.
///
/// Adjacency is an ordered sequence per node; insertion order is the
/// tie-breaking order during relaxation. Node ids are assumed to be
/// canonicalized by the loader; no normalization happens here.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    directed: bool,
    /// Node ids in first-seen order, for deterministic node iteration
    order: Vec<String>,
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Create an empty directed graph
    pub fn directed() -> Self {
        Graph {
            directed: true,
            ..Default::default()
        }
    }

    /// Create an empty undirected graph (every edge is mirrored)
    pub fn undirected() -> Self {
        Graph {
            directed: false,
            ..Default::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Register a node, with or without edges. Idempotent.
    pub fn add_node(&mut self, id: &str) {
        self.ensure_node(id);
    }

    /// Insert an edge, implicitly registering both endpoints.
    ///
    /// Directed graphs keep parallel edges in insertion order. Undirected
    /// graphs mirror the edge to both endpoints, and the insertion is a
    /// no-op if `from` already has an edge to `to` (duplicate undirected
    /// edges between the same pair must not be added twice).
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64, label: Option<&str>) {
        if !self.directed && self.has_edge(from, to) {
            return;
        }

        self.ensure_node(from);
        self.ensure_node(to);
        self.push_edge(from, to, weight, label);
        if !self.directed && from != to {
            self.push_edge(to, from, weight, label);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Node ids in insertion order
    pub fn nodes(&self) -> &[String] {
        &self.order
    }

    /// Outgoing edges of a node in insertion order; empty for declared
    /// nodes without edges and for ids not in the graph
    pub fn edges_from(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges_from(from).iter().any(|e| e.to == to)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of stored arcs (an undirected edge stores two arcs)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn ensure_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
            self.order.push(id.to_string());
        }
    }

    fn push_edge(&mut self, from: &str, to: &str, weight: f64, label: Option<&str>) {
        let edge = Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
            label: label.map(str::to_string),
        };
        self.adjacency
            .get_mut(from)
            .expect("endpoint registered before push")
            .push(edge);
    }
}
