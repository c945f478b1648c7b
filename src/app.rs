//! Console front end: shows the topology, reads the source router and prints both tables.

use std::fmt::{Debug, Display};
use std::io::{BufRead, Write};

use num_traits::{CheckedAdd, Zero};
use serde::Serialize;

use crate::algorithm::{run_both, ShortestPathAlgorithm};
use crate::config::{OutputFormat, RunConfig};
use crate::graph::Graph;
use crate::report::{self, RouteReport, INVALID_SOURCE_MESSAGE, NEGATIVE_CYCLE_MESSAGE};
use crate::{BellmanFord, Dijkstra, Error, Result};

/// Prompt asking for a source router, listing every label with its index
pub fn prompt(node_count: usize) -> String {
    let choices = (0..node_count)
        .map(|v| format!("{}={}", report::label(v), v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Enter source node ({}): ", choices)
}

/// Parses the first token of `line` as a source index and checks it is in `0..node_count`
pub fn parse_source(line: &str, node_count: usize) -> Result<usize> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::ParseSource(line.to_string()))?;
    let index: i64 = token
        .parse()
        .map_err(|_| Error::ParseSource(token.to_string()))?;

    match usize::try_from(index) {
        Ok(index) if index < node_count => Ok(index),
        _ => Err(Error::InvalidSource { index, node_count }),
    }
}

/// Runs one interactive session over `graph`.
///
/// A source that cannot be parsed or is out of range is reported with
/// [`INVALID_SOURCE_MESSAGE`] and returned as an error before either engine runs.
pub fn run<W, G, R, O>(
    graph: &G,
    diagram: &[&str],
    config: &RunConfig,
    mut input: R,
    output: &mut O,
) -> Result<()>
where
    W: Copy + Ord + Zero + CheckedAdd + Debug + Display + Serialize + Send,
    G: Graph<W> + Sync,
    R: BufRead,
    O: Write,
{
    let n = graph.vertex_count();
    let interactive = config.show_topology && config.format == OutputFormat::Text;

    if interactive {
        writeln!(output, "Network Topology:")?;
        for line in diagram {
            writeln!(output, "{}", line)?;
        }
        write!(output, "\n{}", prompt(n))?;
        output.flush()?;
    }

    let mut line = String::new();
    input.read_line(&mut line)?;
    let source = match parse_source(&line, n) {
        Ok(source) => source,
        Err(e) => {
            log::info!("rejected source input {:?}: {}", line.trim(), e);
            writeln!(output, "{}", INVALID_SOURCE_MESSAGE)?;
            return Err(e);
        }
    };
    log::info!("computing routes from {} over {} routers", report::label(source), n);

    let runs = run_both(graph, source, config.parallel);
    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();

    match config.format {
        OutputFormat::Text => {
            let link_state = runs.link_state?;
            write!(
                output,
                "{}",
                report::render_table(ShortestPathAlgorithm::<W, G>::title(&dijkstra), &link_state)
            )?;

            match runs.distance_vector {
                Ok(distance_vector) => write!(
                    output,
                    "{}",
                    report::render_table(
                        ShortestPathAlgorithm::<W, G>::title(&bellman_ford),
                        &distance_vector
                    )
                )?,
                Err(Error::NegativeCycle { .. }) => writeln!(output, "{}", NEGATIVE_CYCLE_MESSAGE)?,
                Err(e) => return Err(e),
            }
        }
        OutputFormat::Json => {
            let reports = vec![
                RouteReport::from_outcome(
                    ShortestPathAlgorithm::<W, G>::name(&dijkstra),
                    source,
                    &runs.link_state,
                )?,
                RouteReport::from_outcome(
                    ShortestPathAlgorithm::<W, G>::name(&bellman_ford),
                    source,
                    &runs.distance_vector,
                )?,
            ];
            serde_json::to_writer_pretty(&mut *output, &reports)?;
            writeln!(output)?;
        }
    }

    output.flush()?;
    Ok(())
}
