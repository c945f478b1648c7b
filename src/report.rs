//! Routing table rendering, as plain text tables or serializable reports.

use std::fmt::{Debug, Display};

use num_traits::Zero;
use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::{Error, Result};

/// Printed in place of a distance vector table when the graph has a negative cycle.
pub const NEGATIVE_CYCLE_MESSAGE: &str = "Graph contains negative weight cycle!";

/// Printed when the requested source router does not exist.
pub const INVALID_SOURCE_MESSAGE: &str = "Invalid source node!";

/// Display label of a vertex: `A` for 0, `B` for 1, ... and `N26`, `N27`, ... past `Z`
pub fn label(vertex: usize) -> String {
    match u8::try_from(vertex) {
        Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
        _ => format!("N{}", vertex),
    }
}

/// Joins the labels of a path with arrows: `A -> C -> B`
pub fn render_path(path: &[usize]) -> String {
    path.iter().map(|&v| label(v)).collect::<Vec<_>>().join(" -> ")
}

/// Renders one routing table: a header and one row per vertex other than the source.
///
/// Unreachable vertices show `INF` and `unreachable` rather than a path.
pub fn render_table<W>(title: &str, result: &ShortestPathResult<W>) -> String
where
    W: Copy + Ord + Zero + Debug + Display,
{
    let mut out = format!(
        "\n=== {} ===\nSource Node: {}\nNode\tDistance\tPath\n",
        title,
        label(result.source)
    );

    for target in (0..result.vertex_count()).filter(|&v| v != result.source) {
        let row = match (result.distance(target), result.path_to(target)) {
            (Some(distance), Some(path)) => {
                format!("{}\t{}\t\t{}\n", label(target), distance, render_path(&path))
            }
            _ => format!("{}\tINF\t\tunreachable\n", label(target)),
        };
        out.push_str(&row);
    }

    out
}

/// One row of a [`RouteReport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry<W> {
    pub node: usize,
    pub label: String,
    /// `None` when the node cannot be reached
    pub distance: Option<W>,
    pub path: Option<Vec<String>>,
}

/// Machine-readable routing table of one algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport<W> {
    pub algorithm: String,
    pub source: usize,
    pub source_label: String,
    pub negative_cycle: bool,
    pub routes: Vec<RouteEntry<W>>,
}

impl<W> RouteReport<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Builds the report of a run; a negative cycle yields an empty route list.
    pub fn from_outcome(
        algorithm: &str,
        source: usize,
        outcome: &Result<ShortestPathResult<W>>,
    ) -> Result<Self> {
        let (negative_cycle, routes) = match outcome {
            Ok(result) => (false, Self::entries(result)),
            Err(Error::NegativeCycle { .. }) => (true, Vec::new()),
            Err(e) => return Err(Error::AlgorithmError(format!("{}: {}", algorithm, e))),
        };

        Ok(RouteReport {
            algorithm: algorithm.to_string(),
            source,
            source_label: label(source),
            negative_cycle,
            routes,
        })
    }

    fn entries(result: &ShortestPathResult<W>) -> Vec<RouteEntry<W>> {
        (0..result.vertex_count())
            .filter(|&v| v != result.source)
            .map(|v| RouteEntry {
                node: v,
                label: label(v),
                distance: result.distance(v),
                path: result
                    .path_to(v)
                    .map(|path| path.into_iter().map(label).collect()),
            })
            .collect()
    }
}
