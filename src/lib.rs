//! Routing SSSP - link state and distance vector shortest path routing
//!
//! This library computes single-source shortest paths over a small, static network
//! topology with two classical algorithms: Dijkstra's algorithm ("link state routing")
//! and Bellman-Ford ("distance vector routing").
//!
//! Both engines consume the same [`graph::Graph`] and produce the same
//! [`ShortestPathResult`], which the [`report`] module renders as routing tables.

pub mod algorithm;
pub mod app;
pub mod config;
pub mod graph;
pub mod report;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::matrix::AdjacencyMatrix;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid source node: {index} (expected 0..{node_count})")]
    InvalidSource { index: i64, node_count: usize },

    #[error("Could not read a source node from {0:?}")]
    ParseSource(String),

    #[error("Graph contains a negative-weight cycle reachable from vertex {origin}")]
    NegativeCycle { origin: usize },

    #[error("Distance through edge {from} -> {to} does not fit the weight type")]
    DistanceOverflow { from: usize, to: usize },

    #[error("Adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
