use crate::graph::types::{BackEdge, TraversalResult};
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};

/// Breadth-first level traversal from `start`.
///
/// A back/cross edge is recorded whenever an edge leads to a node that was
/// already popped from the frontier at the time the edge is examined. In a
/// general directed graph that includes cross edges between sibling
/// subtrees, not only true cycles; callers wanting an exact cycle test
/// should use [`super::dfs::depth_first`]. A start node absent from the
/// graph yields an empty result.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn breadth_first(graph: &Graph, start: &str) -> TraversalResult {
    let mut result = TraversalResult::empty(start);
    if !graph.contains(start) {
        tracing::debug!("start not in graph");
        return result;
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut popped: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();

    seen.insert(start.to_string());
    result.levels.insert(start.to_string(), 0);
    queue.push_back((start.to_string(), 0));

    while let Some((node, level)) = queue.pop_front() {
        popped.insert(node.clone());
        result.visited_order.push(node.clone());

        for edge in graph.edges_from(&node) {
            if !seen.contains(&edge.to) {
                seen.insert(edge.to.clone());
                result.levels.insert(edge.to.clone(), level + 1);
                queue.push_back((edge.to.clone(), level + 1));
            } else if popped.contains(&edge.to) {
                result.back_edges.push(BackEdge {
                    from: node.clone(),
                    to: edge.to.clone(),
                });
            }
        }
    }

    result
}
