//! The fixed five-router topology used by the `routing_protocols` binary.

use crate::graph::AdjacencyMatrix;
use crate::Result;

/// Number of routers in the sample topology (A through E)
pub const SAMPLE_NODES: usize = 5;

/// Edge-weight matrix of the sample topology; `0` means no link.
pub const SAMPLE_WEIGHTS: [[i64; SAMPLE_NODES]; SAMPLE_NODES] = [
    [0, 4, 2, 0, 0],  // A
    [4, 0, 1, 5, 0],  // B
    [2, 1, 0, 8, 10], // C
    [0, 5, 8, 0, 2],  // D
    [0, 0, 10, 2, 0], // E
];

/// ASCII drawing of the sample topology, one line per entry.
pub const SAMPLE_DIAGRAM: &[&str] = &[
    "    A(0)",
    "   / \\  ",
    "  4   2 ",
    " /     \\",
    "B(1)--C(2)",
    "| \\   / |",
    "5  1  10|",
    "|   \\   |",
    "D(3)--E(4)",
    "   2",
];

/// Builds the sample topology
pub fn sample_topology() -> Result<AdjacencyMatrix<i64>> {
    AdjacencyMatrix::from_rows(&SAMPLE_WEIGHTS)
}
