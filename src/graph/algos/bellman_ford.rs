use crate::graph::algos::path::{PredecessorEntry, ShortestPathTree};
use crate::graph::types::{Cost, PathResult};
use crate::graph::Graph;
use serde::Serialize;

/// Outcome of a Bellman-Ford run.
///
/// When `has_negative_cycle` is true, distances and predecessors for nodes
/// downstream of the cycle are indeterminate and must not be trusted; they
/// are reported as-is, not auto-corrected or rejected.
#[derive(Debug, Clone, Serialize)]
pub struct Relaxation {
    pub tree: ShortestPathTree,
    pub has_negative_cycle: bool,
}

impl Relaxation {
    /// Per-destination view of the relaxed table, sharing the predecessor
    /// walk with Dijkstra
    pub fn path_to(&self, destination: &str) -> PathResult {
        self.tree.path_to(destination)
    }
}

/// Relax every edge up to (node count - 1) times from `source`, then scan
/// once more for edges that still improve; any such edge proves a
/// negative-weight cycle reachable from the source.
///
/// Nodes and their edges are iterated in insertion order, so relaxation
/// ties resolve identically across runs. A source that is not in the graph
/// yields empty distance/predecessor maps and no cycle flag (the defined
/// "unknown source" result, not an error).
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn relax_all(graph: &Graph, source: &str) -> Relaxation {
    let mut tree = ShortestPathTree::new(source);
    if !graph.contains(source) {
        tracing::debug!("source not in graph");
        return Relaxation {
            tree,
            has_negative_cycle: false,
        };
    }

    for node in graph.nodes() {
        tree.distances.insert(node.clone(), Cost::INFINITE);
    }
    tree.distances.insert(source.to_string(), Cost::ZERO);

    let passes = graph.node_count().saturating_sub(1);
    for _ in 0..passes {
        let mut updated = false;
        for node in graph.nodes() {
            if !tree.cost_to(node).is_finite() {
                continue;
            }
            for edge in graph.edges_from(node) {
                let candidate = tree.cost_to(node) + edge.weight;
                if candidate.value() < tree.cost_to(&edge.to).value() {
                    tree.distances.insert(edge.to.clone(), candidate);
                    tree.predecessors.insert(
                        edge.to.clone(),
                        PredecessorEntry {
                            prev: node.clone(),
                            label: edge.label.clone(),
                            weight: edge.weight,
                        },
                    );
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }

    let has_negative_cycle = improving_edge_remains(graph, &tree);
    if has_negative_cycle {
        tracing::debug!("negative cycle reachable from source");
    }

    Relaxation {
        tree,
        has_negative_cycle,
    }
}

fn improving_edge_remains(graph: &Graph, tree: &ShortestPathTree) -> bool {
    for node in graph.nodes() {
        let from_cost = tree.cost_to(node);
        if !from_cost.is_finite() {
            continue;
        }
        for edge in graph.edges_from(node) {
            if (from_cost + edge.weight).value() < tree.cost_to(&edge.to).value() {
                return true;
            }
        }
    }
    false
}
