use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use serde::Serialize;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Distances from source to each vertex, `None` when the vertex is unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Number of vertices covered by this result
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Distance from the source to `target`, `None` if unreachable or out of range
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Returns true if `target` has a finite distance from the source
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    /// Walks predecessor links back from `target` and returns the chain from its root.
    ///
    /// No reachability check is made: for an unreachable target the walk stops at
    /// the target itself, yielding a single-node chain. Use [`Self::path_to`] when
    /// the caller needs to know whether a path exists.
    pub fn reconstruct_path(&self, target: usize) -> Vec<usize> {
        let mut path = Vec::new();
        if target >= self.predecessors.len() {
            return path;
        }

        let mut current = target;
        path.push(current);
        while let Some(pred) = self.predecessors[current] {
            // A well-formed predecessor tree never revisits a vertex
            if path.len() > self.predecessors.len() {
                log::warn!("predecessor chain from {} does not terminate", target);
                break;
            }
            path.push(pred);
            current = pred;
        }

        path.reverse();
        path
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let path = self.reconstruct_path(target);
        if path.first() == Some(&self.source) {
            Some(path)
        } else {
            None
        }
    }
}

/// Sums edge weights along `path`, `None` if a hop is not an edge of `graph` or the sum overflows
pub fn path_cost<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Copy + Ord + Zero + CheckedAdd + Debug,
    G: Graph<W>,
{
    path.windows(2).try_fold(W::zero(), |total, hop| {
        graph
            .get_edge_weight(hop[0], hop[1])
            .and_then(|weight| total.checked_add(&weight))
    })
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Copy + Ord + Zero + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Heading of the routing table this algorithm produces
    fn title(&self) -> &'static str;
}
