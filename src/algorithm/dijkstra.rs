use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};

use crate::graph::Graph;
use crate::algorithm::{relax, ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear minimum scan, as used by link state routing
///
/// Each round selects the unvisited vertex with the smallest tentative distance
/// (lowest vertex ID on ties, unreachable vertices last) and relaxes its edges
/// towards unvisited neighbours. Edge weights must be non-negative for the
/// distances to be correct; this is not enforced.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Unvisited vertex with the smallest tentative distance
fn find_min_distance<W>(distances: &[Option<W>], visited: &[bool]) -> Option<usize>
where
    W: Copy + Ord,
{
    let mut best: Option<usize> = None;
    for v in (0..distances.len()).filter(|&v| !visited[v]) {
        let closer = match best {
            None => true,
            Some(b) => match (distances[v], distances[b]) {
                (Some(dv), Some(db)) => dv < db,
                (Some(_), None) => true,
                (None, _) => false,
            },
        };
        if closer {
            best = Some(v);
        }
    }
    best
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Copy + Ord + Zero + CheckedAdd + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn title(&self) -> &'static str {
        "LINK STATE ROUTING (Dijkstra)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if graph.has_negative_weight() {
            log::warn!("Dijkstra run on a graph with negative edge weights; distances may be wrong");
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());

        for _ in 1..n {
            let u = match find_min_distance(&distances, &visited) {
                Some(u) => u,
                None => break,
            };
            visited[u] = true;

            // Relaxing from an unreachable vertex would only add to infinity
            let dist_u = match distances[u] {
                Some(d) => d,
                None => continue,
            };

            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }
                if let Some(new_dist) = relax(dist_u, weight, distances[v], u, v)? {
                    log::trace!("dijkstra: relax {} -> {} to {:?}", u, v, new_dist);
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                }
            }
        }

        log::debug!(
            "dijkstra from {}: {} of {} vertices reachable",
            source,
            distances.iter().filter(|d| d.is_some()).count(),
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
