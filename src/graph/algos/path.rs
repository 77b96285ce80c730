//! Predecessor tables and path reconstruction shared by Dijkstra and
//! Bellman-Ford

use crate::graph::types::{Cost, PathResult};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// The last hop on the current best path to a node: upstream node plus the
/// metadata of the edge that was relaxed
#[derive(Debug, Clone, Serialize)]
pub struct PredecessorEntry {
    pub prev: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub weight: f64,
}

/// Single-source distance/predecessor table produced by one relaxation run.
///
/// One run serves every destination reachable from `source`; per-destination
/// paths are views derived from it via [`ShortestPathTree::path_to`].
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathTree {
    pub source: String,
    pub distances: HashMap<String, Cost>,
    pub predecessors: HashMap<String, PredecessorEntry>,
}

impl ShortestPathTree {
    pub(crate) fn new(source: &str) -> Self {
        ShortestPathTree {
            source: source.to_string(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Best known cost to `node`; infinite for unreached or unknown nodes
    pub fn cost_to(&self, node: &str) -> Cost {
        self.distances.get(node).copied().unwrap_or(Cost::INFINITE)
    }

    /// True for the "unknown source" result of a run whose source was not
    /// in the graph
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Unwind predecessor links from `destination` back to the source,
    /// re-attaching edge labels and weights to the winning path.
    ///
    /// Unreachable or unknown destinations yield the "no path" sentinel.
    /// A predecessor chain that revisits a node or does not reach the
    /// source (possible only in a table corrupted by a negative cycle)
    /// also yields the sentinel rather than looping.
    pub fn path_to(&self, destination: &str) -> PathResult {
        let cost = self.cost_to(destination);
        if !cost.is_finite() {
            return PathResult::no_path(&self.source, destination);
        }

        if destination == self.source {
            return PathResult {
                from: self.source.clone(),
                to: destination.to_string(),
                found: true,
                cost: Cost::ZERO,
                path: vec![self.source.clone()],
                labels: Vec::new(),
                weights: Vec::new(),
            };
        }

        let mut path = Vec::new();
        let mut labels = Vec::new();
        let mut weights = Vec::new();
        let mut walked: HashSet<String> = HashSet::new();

        let mut current = destination.to_string();
        loop {
            if !walked.insert(current.clone()) {
                return PathResult::no_path(&self.source, destination);
            }
            path.push(current.clone());

            match self.predecessors.get(&current) {
                Some(entry) => {
                    labels.push(entry.label.clone().unwrap_or_default());
                    weights.push(entry.weight);
                    current = entry.prev.clone();
                }
                None => break,
            }
        }

        if path.last().map(String::as_str) != Some(self.source.as_str()) {
            return PathResult::no_path(&self.source, destination);
        }

        path.reverse();
        labels.reverse();
        weights.reverse();

        PathResult {
            from: self.source.clone(),
            to: destination.to_string(),
            found: true,
            cost,
            path,
            labels,
            weights,
        }
    }
}
