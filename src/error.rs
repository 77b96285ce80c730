//! Error types for routegraph
//!
//! Traversal outcomes ("no path", "unreachable", negative cycle) are ordinary
//! return values, never errors; only misuse of the batch driver seam fails.

use thiserror::Error;

/// Errors that can occur during routegraph operations
#[derive(Error, Debug)]
pub enum RouteGraphError {
    #[error("graph is empty")]
    EmptyGraph,

    #[error("none of the requested origins is present in the graph: {requested:?}")]
    NoValidOrigins { requested: Vec<String> },

    #[error("unknown algorithm: {0} (expected: dijkstra or bellman-ford)")]
    UnknownAlgorithm(String),
}

impl RouteGraphError {
    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteGraphError::EmptyGraph => "empty_graph",
            RouteGraphError::NoValidOrigins { .. } => "no_valid_origins",
            RouteGraphError::UnknownAlgorithm(_) => "unknown_algorithm",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, RouteGraphError>;
