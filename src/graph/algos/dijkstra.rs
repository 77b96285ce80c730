use crate::graph::algos::path::{PredecessorEntry, ShortestPathTree};
use crate::graph::types::{Cost, PathResult};
use crate::graph::Graph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost,
/// ties broken by node id so pop order is deterministic)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node: String,
    pub cost: Cost,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.cost.value() == other.cost.value()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .value()
            .partial_cmp(&other.cost.value())
            .unwrap()
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Single-source run of the main Dijkstra loop, optionally stopping early
/// once `stop_at` is settled. Entries whose cost is stale (greater than the
/// recorded best for that node) are discarded on pop, which stands in for a
/// decrease-key operation.
fn relax_from(graph: &Graph, source: &str, stop_at: Option<&str>) -> ShortestPathTree {
    let mut tree = ShortestPathTree::new(source);
    if !graph.contains(source) {
        return tree;
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    tree.distances.insert(source.to_string(), Cost::ZERO);
    heap.push(Reverse(HeapEntry {
        node: source.to_string(),
        cost: Cost::ZERO,
    }));

    while let Some(Reverse(HeapEntry { node: current, cost })) = heap.pop() {
        if stop_at == Some(current.as_str()) {
            break;
        }
        if cost.value() > tree.cost_to(&current).value() {
            continue;
        }

        for edge in graph.edges_from(&current) {
            let candidate = cost + edge.weight;
            if candidate.value() < tree.cost_to(&edge.to).value() {
                tree.distances.insert(edge.to.clone(), candidate);
                tree.predecessors.insert(
                    edge.to.clone(),
                    PredecessorEntry {
                        prev: current.clone(),
                        label: edge.label.clone(),
                        weight: edge.weight,
                    },
                );
                heap.push(Reverse(HeapEntry {
                    node: edge.to.clone(),
                    cost: candidate,
                }));
            }
        }
    }

    tree
}

/// Find the cheapest path from `source` to `destination`.
///
/// An absent source or destination, like an unreachable destination, yields
/// the "no path" sentinel (infinite cost, empty path/labels/weights) rather
/// than an error. Weights are assumed non-negative; the result is undefined
/// (not validated) if the graph violates that.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn shortest_path(graph: &Graph, source: &str, destination: &str) -> PathResult {
    if !graph.contains(source) || !graph.contains(destination) {
        tracing::debug!("source or destination not in graph");
        return PathResult::no_path(source, destination);
    }

    relax_from(graph, source, Some(destination)).path_to(destination)
}

/// Settle every node reachable from `source`, returning the full
/// distance/predecessor table.
///
/// One table serves every destination from that source; the batch driver
/// uses this instead of re-running the search per destination pair. An
/// absent source yields an empty table.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn shortest_path_tree(graph: &Graph, source: &str) -> ShortestPathTree {
    relax_from(graph, source, None)
}

#[cfg(test)]
mod tests;
