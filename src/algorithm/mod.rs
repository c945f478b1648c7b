pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;

use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};

use crate::graph::Graph;
use crate::{Error, Result};

pub use traits::{path_cost, ShortestPathAlgorithm, ShortestPathResult};

/// Outcome of running both routing engines from the same source
#[derive(Debug)]
pub struct EngineRuns<W>
where
    W: Copy + Ord + Zero + Debug,
{
    pub link_state: Result<ShortestPathResult<W>>,
    pub distance_vector: Result<ShortestPathResult<W>>,
}

/// Runs Dijkstra and Bellman-Ford over `graph`, on the rayon pool when `parallel` is set.
pub fn run_both<W, G>(graph: &G, source: usize, parallel: bool) -> EngineRuns<W>
where
    W: Copy + Ord + Zero + CheckedAdd + Debug + Send,
    G: Graph<W> + Sync,
{
    let link_state = || dijkstra::Dijkstra::new().compute_shortest_paths(graph, source);
    let distance_vector = || bellman_ford::BellmanFord::new().compute_shortest_paths(graph, source);

    let (link_state, distance_vector) = if parallel {
        rayon::join(link_state, distance_vector)
    } else {
        (link_state(), distance_vector())
    };

    EngineRuns {
        link_state,
        distance_vector,
    }
}

/// New distance for `v` through the edge `u -> v`, or `None` if it does not beat `current`.
///
/// A sum that overflows upwards cannot beat a finite `current` and is skipped; any
/// other overflow is reported as [`Error::DistanceOverflow`].
pub(crate) fn relax<W>(
    dist_u: W,
    weight: W,
    current: Option<W>,
    u: usize,
    v: usize,
) -> Result<Option<W>>
where
    W: Copy + Ord + Zero + CheckedAdd,
{
    match dist_u.checked_add(&weight) {
        Some(candidate) => Ok(match current {
            Some(current) if candidate >= current => None,
            _ => Some(candidate),
        }),
        None if weight > W::zero() && current.is_some() => Ok(None),
        None => Err(Error::DistanceOverflow { from: u, to: v }),
    }
}
