//! Batch driver: runs the traversal engine over many origins or many
//! (origin, destination) pairs, reusing one relaxation run per origin

use crate::error::{Result, RouteGraphError};
use crate::graph::algos::bellman_ford::relax_all;
use crate::graph::algos::bfs::breadth_first;
use crate::graph::algos::dfs::depth_first;
use crate::graph::algos::dijkstra::shortest_path_tree;
use crate::graph::algos::path::ShortestPathTree;
use crate::graph::types::{Algorithm, BatchOptions, PathResult, TraversalResult};
use crate::graph::Graph;
use serde::Serialize;
use std::collections::HashMap;

/// BFS and DFS run side by side from one origin
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub origin: String,
    pub bfs: TraversalResult,
    pub dfs: TraversalResult,
}

/// One relaxation run per origin. Returns `None` when Bellman-Ford reports
/// a reachable negative cycle, since the whole table is then indeterminate.
fn relax_origin(graph: &Graph, origin: &str, algorithm: Algorithm) -> Option<ShortestPathTree> {
    match algorithm {
        Algorithm::Dijkstra => Some(shortest_path_tree(graph, origin)),
        Algorithm::BellmanFord => {
            let relaxation = relax_all(graph, origin);
            if relaxation.has_negative_cycle {
                tracing::warn!(
                    origin = %origin,
                    "negative cycle reachable from origin, discarding its routes"
                );
                return None;
            }
            Some(relaxation.tree)
        }
    }
}

/// Scan every destination reachable from the requested origins, collecting
/// routes that visit at least `min_path_nodes` nodes, up to `max_results`.
///
/// Each origin is relaxed exactly once and its table answers all
/// destinations, scanned in node insertion order. Origins absent from the
/// graph are skipped; if none is present the call fails.
#[tracing::instrument(skip(graph, origins, opts), fields(origins = origins.len()))]
pub fn collect_routes(
    graph: &Graph,
    origins: &[String],
    opts: &BatchOptions,
) -> Result<Vec<PathResult>> {
    if graph.is_empty() {
        return Err(RouteGraphError::EmptyGraph);
    }

    let valid: Vec<&String> = origins
        .iter()
        .filter(|origin| graph.contains(origin.as_str()))
        .collect();
    if valid.is_empty() {
        return Err(RouteGraphError::NoValidOrigins {
            requested: origins.to_vec(),
        });
    }

    let mut routes = Vec::new();
    'origins: for origin in valid {
        let Some(tree) = relax_origin(graph, origin, opts.algorithm) else {
            continue;
        };

        for destination in graph.nodes() {
            if destination == origin || !tree.cost_to(destination).is_finite() {
                continue;
            }
            let route = tree.path_to(destination);
            if route.path.len() >= opts.min_path_nodes {
                routes.push(route);
                if opts.max_results.is_some_and(|max| routes.len() >= max) {
                    break 'origins;
                }
            }
        }
    }

    tracing::debug!(found = routes.len(), "route collection finished");
    Ok(routes)
}

/// Answer a list of (origin, destination) pairs, one record per pair in
/// request order.
///
/// Pairs are grouped by origin and each distinct origin is relaxed exactly
/// once; pairs with an absent endpoint (or an origin poisoned by a negative
/// cycle) yield the "no path" sentinel record. Stops early once
/// `max_results` records have been produced.
#[tracing::instrument(skip(graph, pairs, opts), fields(pairs = pairs.len()))]
pub fn routes_for_pairs(
    graph: &Graph,
    pairs: &[(String, String)],
    opts: &BatchOptions,
) -> Result<Vec<PathResult>> {
    if graph.is_empty() {
        return Err(RouteGraphError::EmptyGraph);
    }

    let mut tables: HashMap<String, Option<ShortestPathTree>> = HashMap::new();
    let mut routes = Vec::new();

    for (origin, destination) in pairs {
        if opts.max_results.is_some_and(|max| routes.len() >= max) {
            break;
        }

        if !graph.contains(origin) || !graph.contains(destination) {
            routes.push(PathResult::no_path(origin, destination));
            continue;
        }

        let table = tables
            .entry(origin.clone())
            .or_insert_with(|| relax_origin(graph, origin, opts.algorithm));

        match table {
            Some(tree) => routes.push(tree.path_to(destination)),
            None => routes.push(PathResult::no_path(origin, destination)),
        }
    }

    Ok(routes)
}

/// Run BFS and DFS side by side from each of the first `limit` requested
/// origins present in the graph
#[tracing::instrument(skip(graph, origins), fields(origins = origins.len()))]
pub fn traversal_reports(graph: &Graph, origins: &[String], limit: usize) -> Vec<TraversalReport> {
    origins
        .iter()
        .filter(|origin| graph.contains(origin.as_str()))
        .take(limit)
        .map(|origin| TraversalReport {
            origin: origin.clone(),
            bfs: breadth_first(graph, origin),
            dfs: depth_first(graph, origin),
        })
        .collect()
}
