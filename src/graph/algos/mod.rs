//! Graph algorithm implementations
//!
//! Contains concrete implementations of the traversal engine:
//! - `dijkstra`: weighted shortest-path search
//! - `bellman_ford`: general relaxation with negative-cycle detection
//! - `bfs`: level traversal with back/cross-edge detection
//! - `dfs`: depth traversal with exact cycle detection
//! - `path`: predecessor tables and path reconstruction shared by the
//!   relaxation algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;

pub use bellman_ford::{relax_all, Relaxation};
pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use dijkstra::{shortest_path, shortest_path_tree};
pub use path::{PredecessorEntry, ShortestPathTree};
