use crate::graph::types::{BackEdge, TraversalResult};
use crate::graph::Graph;
use std::collections::HashSet;

/// One suspended visit in the explicit traversal stack
struct Frame {
    node: String,
    depth: u32,
    edge_idx: usize,
}

/// Depth-first traversal from `start`.
///
/// A back edge is recorded when an edge leads to a node on the current
/// ancestor chain (excluding the node itself), which is the exact cycle
/// test: every reported entry closes a cycle through the ancestry. The
/// traversal runs on an explicit stack, so arbitrarily deep graphs complete
/// without exhausting the call stack. A start node absent from the graph
/// yields an empty result.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn depth_first(graph: &Graph, start: &str) -> TraversalResult {
    let mut result = TraversalResult::empty(start);
    if !graph.contains(start) {
        tracing::debug!("start not in graph");
        return result;
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut ancestry: HashSet<String> = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    visited.insert(start.to_string());
    ancestry.insert(start.to_string());
    result.levels.insert(start.to_string(), 0);
    result.visited_order.push(start.to_string());
    stack.push(Frame {
        node: start.to_string(),
        depth: 0,
        edge_idx: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let edges = graph.edges_from(&frame.node);
        let Some(edge) = edges.get(frame.edge_idx) else {
            ancestry.remove(&frame.node);
            stack.pop();
            continue;
        };
        frame.edge_idx += 1;
        let depth = frame.depth;
        let from = frame.node.clone();

        if !visited.contains(&edge.to) {
            visited.insert(edge.to.clone());
            ancestry.insert(edge.to.clone());
            result.levels.insert(edge.to.clone(), depth + 1);
            result.visited_order.push(edge.to.clone());
            stack.push(Frame {
                node: edge.to.clone(),
                depth: depth + 1,
                edge_idx: 0,
            });
        } else if edge.to != from && ancestry.contains(&edge.to) {
            result.back_edges.push(BackEdge {
                from,
                to: edge.to.clone(),
            });
        }
    }

    result
}
