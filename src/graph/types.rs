use crate::error::RouteGraphError;
use serde::Serialize;
use std::collections::HashMap;

/// Accumulated cost of a path.
///
/// `Cost::INFINITE` is the distinguished "no path" sentinel, used both for
/// unreachable destinations and for absent source/destination nodes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITE: Cost = Cost(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Cost(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl std::ops::Add<f64> for Cost {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        Cost(self.0 + weight)
    }
}

/// Algorithm used by the batch driver for per-origin relaxation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Weighted shortest paths, non-negative weights assumed
    #[default]
    Dijkstra,
    /// General relaxation, negative weights allowed, negative cycles detected
    BellmanFord,
}

impl std::str::FromStr for Algorithm {
    type Err = RouteGraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            other => Err(RouteGraphError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Options for batch route collection
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Relaxation engine to run per origin
    pub algorithm: Algorithm,
    /// Keep only routes visiting at least this many nodes
    pub min_path_nodes: usize,
    /// Stop after collecting this many routes
    pub max_results: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            algorithm: Algorithm::Dijkstra,
            min_path_nodes: 2,
            max_results: None,
        }
    }
}

/// Result of a single shortest-path query.
///
/// When a path is found, `path` holds the visited nodes in order and
/// `labels`/`weights` hold the metadata of the edges between them, so
/// `path.len() == labels.len() + 1 == weights.len() + 1`. An unlabeled edge
/// contributes an empty string to `labels`. "No path" is reported as
/// infinite cost with all three sequences empty.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub cost: Cost,
    pub path: Vec<String>,
    pub labels: Vec<String>,
    pub weights: Vec<f64>,
}

impl PathResult {
    /// The defined "no path" sentinel, also used for absent endpoints
    pub fn no_path(from: &str, to: &str) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            cost: Cost::INFINITE,
            path: Vec::new(),
            labels: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Per-leg view of the path, re-zipping nodes with edge metadata
    pub fn steps(&self) -> Vec<PathStep> {
        self.path
            .windows(2)
            .enumerate()
            .map(|(i, pair)| PathStep {
                from: pair[0].clone(),
                to: pair[1].clone(),
                label: self.labels[i].clone(),
                weight: self.weights[i],
            })
            .collect()
    }
}

/// One leg of a reconstructed path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep {
    pub from: String,
    pub to: String,
    pub label: String,
    pub weight: f64,
}

/// An edge discovered during traversal that points to an already-processed
/// node.
///
/// For DFS this is a true back edge (the target is on the current ancestor
/// chain). For BFS the target is merely already visited, which in a directed
/// graph also covers cross edges between sibling subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackEdge {
    pub from: String,
    pub to: String,
}

/// Result of a BFS or DFS traversal
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub start: String,
    /// Nodes in the order they were visited
    pub visited_order: Vec<String>,
    /// Level (BFS) or depth (DFS) per reached node; `start` is 0
    pub levels: HashMap<String, u32>,
    pub back_edges: Vec<BackEdge>,
}

impl TraversalResult {
    pub(crate) fn empty(start: &str) -> Self {
        TraversalResult {
            start: start.to_string(),
            visited_order: Vec::new(),
            levels: HashMap::new(),
            back_edges: Vec::new(),
        }
    }
}
