use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};

use crate::graph::Graph;
use crate::algorithm::{relax, ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Bellman-Ford edge relaxation, as used by distance vector routing
///
/// Negative edge weights are allowed. If a negative-weight cycle is reachable
/// from the source the run fails with [`Error::NegativeCycle`] and no partial
/// distances are returned.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

/// Distance `u -> v` would get through this edge if it improves on the current one
fn improved<W>(distances: &[Option<W>], u: usize, v: usize, weight: W) -> Result<Option<W>>
where
    W: Copy + Ord + Zero + CheckedAdd,
{
    match distances[u] {
        Some(dist_u) => relax(dist_u, weight, distances[v], u, v),
        None => Ok(None),
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Copy + Ord + Zero + CheckedAdd + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn title(&self) -> &'static str {
        "DISTANCE VECTOR ROUTING (Bellman-Ford)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();

        // Step 1: initialize
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        // Step 2: relax every edge n-1 times, in ascending (u, v) order
        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            let mut did_update = false;
            for u in 0..n {
                for (v, weight) in graph.outgoing_edges(u) {
                    if let Some(new_dist) = improved(&distances, u, v, weight)? {
                        log::trace!("bellman-ford: relax {} -> {} to {:?}", u, v, new_dist);
                        distances[v] = Some(new_dist);
                        predecessors[v] = Some(u);
                        did_update = true;
                    }
                }
            }
            if !did_update {
                break;
            }
        }

        // Step 3: any edge still relaxable lies on or behind a negative cycle
        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                if improved(&distances, u, v, weight)?.is_some() {
                    log::debug!("bellman-ford from {}: edge {} -> {} still relaxable", source, u, v);
                    return Err(Error::NegativeCycle { origin: source });
                }
            }
        }

        log::debug!("bellman-ford from {}: converged after {} passes", source, passes);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
