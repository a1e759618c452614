//! Dense adjacency-matrix graph and weighted edge list.
//!
//! Variables:
//!   V         = number of vertices
//!   w[u*V+v]  = weight of edge u -> v, row-major
//!
//! Equations:
//!   edge(u, v) exists  <=>  w[u*V+v] > 0
//!   memory = V^2 words, edge lookup O(1)

use crate::error::{AlgoError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGraph {
    vertices: usize,
    weights: Vec<i64>,
}

impl DenseGraph {
    /// Build from `V*V` row-major weights.
    pub fn from_rows(vertices: usize, weights: Vec<i64>) -> Result<Self> {
        if weights.len() != vertices * vertices {
            return Err(AlgoError::InvalidInput(format!(
                "adjacency matrix for {vertices} vertices needs {} entries, got {}",
                vertices * vertices,
                weights.len()
            )));
        }
        Ok(Self { vertices, weights })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Positive-weight out-edges of `u` as `(v, weight)`.
    pub fn neighbours(&self, u: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        let row = &self.weights[u * self.vertices..(u + 1) * self.vertices];
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(v, &w)| (v, w))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}
