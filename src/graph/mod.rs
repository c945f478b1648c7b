pub mod traits;
pub mod matrix;
pub mod sample;

pub use traits::{Graph, MutableGraph};
pub use matrix::AdjacencyMatrix;
