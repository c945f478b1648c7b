use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Zero;
use std::fmt::Debug;

/// A directed graph stored as a dense edge-weight matrix
///
/// Each cell holds `Some(weight)` for an edge `from -> to` and `None` when there is no
/// edge, so a zero-cost edge is distinct from a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Row-major cells: `cells[from * vertex_count + to]`
    cells: Vec<Option<W>>,
}

impl<W> AdjacencyMatrix<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    /// Creates a graph with the specified number of vertices and no edges
    pub fn with_vertices(vertices: usize) -> Self {
        AdjacencyMatrix {
            vertex_count: vertices,
            cells: vec![None; vertices * vertices],
        }
    }

    /// Builds a graph from a classic weight matrix in which `0` means "no edge".
    ///
    /// The diagonal is ignored. Rows must all have as many entries as there are rows.
    pub fn from_rows<R: AsRef<[W]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut graph = Self::with_vertices(n);

        for (from, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(Error::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: n,
                });
            }
            for (to, &weight) in row.iter().enumerate() {
                if from != to && !weight.is_zero() {
                    graph.cells[from * n + to] = Some(weight);
                }
            }
        }

        Ok(graph)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        !self.has_negative_weight()
    }

    fn index(&self, from: usize, to: usize) -> Option<usize> {
        if self.has_vertex(from) && self.has_vertex(to) {
            Some(from * self.vertex_count + to)
        } else {
            None
        }
    }
}

impl<W> Default for AdjacencyMatrix<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for AdjacencyMatrix<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if !self.has_vertex(vertex) {
            return Box::new(std::iter::empty());
        }
        let start = vertex * self.vertex_count;
        let row = &self.cells[start..start + self.vertex_count];
        Box::new(
            row.iter()
                .enumerate()
                .filter_map(|(to, cell)| cell.map(|weight| (to, weight))),
        )
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.index(from, to).and_then(|idx| self.cells[idx])
    }
}

impl<W> MutableGraph<W> for AdjacencyMatrix<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn add_vertex(&mut self) -> usize {
        let old = self.vertex_count;
        let new = old + 1;
        let mut cells = vec![None; new * new];
        for from in 0..old {
            cells[from * new..from * new + old]
                .copy_from_slice(&self.cells[from * old..(from + 1) * old]);
        }
        self.cells = cells;
        self.vertex_count = new;
        old
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        match self.index(from, to) {
            Some(idx) => {
                self.cells[idx] = Some(weight);
                true
            }
            None => false,
        }
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        match self.index(from, to) {
            Some(idx) => self.cells[idx].take().is_some(),
            None => false,
        }
    }
}
