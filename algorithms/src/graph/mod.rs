pub mod bellman_ford;
pub mod dense;
pub mod dijkstra;
pub mod distance;

pub use dense::{DenseGraph, Edge};
pub use distance::Distance;

use crate::error::{AlgoError, Result};

pub(crate) fn check_vertex(vertex: usize, vertices: usize) -> Result<()> {
    if vertex < vertices {
        Ok(())
    } else {
        Err(AlgoError::VertexOutOfRange { vertex, vertices })
    }
}
