use std::fmt::Debug;
use num_traits::Zero;

/// Trait representing a weighted directed graph whose vertices are `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Copy + Ord + Zero + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in ascending target order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns true if any edge carries a weight below zero
    fn has_negative_weight(&self) -> bool {
        (0..self.vertex_count())
            .any(|u| self.outgoing_edges(u).any(|(_, weight)| weight < W::zero()))
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds (or overwrites) a directed edge between vertices with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Adds the edge in both directions, as a bidirectional link between two routers
    fn add_link(&mut self, a: usize, b: usize, weight: W) -> bool {
        self.add_edge(a, b, weight) && self.add_edge(b, a, weight)
    }
}
