//! Bellman-Ford single-source shortest paths.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = edge list as (u, v, weight), weights may be negative
//!   dist[v] = shortest known distance from source to v
//!
//! Equations:
//!   Initialise: dist[source] = 0,  dist[v] = Unreachable  for v != source
//!
//!   Relax (repeated V-1 times, stop early on a quiet round):
//!     for each (u, v, w) in E with dist[u] reachable:
//!       dist[v] = min(dist[v], dist[u] + w)
//!
//!   Negative cycle detection (pass V):
//!     if any edge still relaxes => negative cycle reachable from source
//!
//!   Complexity: O(V * E)

use super::{check_vertex, Distance, Edge};
use crate::error::{AlgoError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BellmanFord {
    ShortestPaths(Vec<Distance>),
    NegativeCycle,
}

fn relax(dist: &[Distance], edge: &Edge) -> Result<Option<Distance>> {
    let Distance::Finite(du) = dist[edge.from] else {
        return Ok(None);
    };
    let candidate = Distance::Finite(
        du.checked_add(edge.weight)
            .ok_or(AlgoError::Overflow("bellman-ford relaxation"))?,
    );
    Ok((candidate < dist[edge.to]).then_some(candidate))
}

pub fn bellman_ford(vertices: usize, edges: &[Edge], source: usize) -> Result<BellmanFord> {
    check_vertex(source, vertices)?;
    for edge in edges {
        check_vertex(edge.from, vertices)?;
        check_vertex(edge.to, vertices)?;
    }

    let mut dist = vec![Distance::Unreachable; vertices];
    dist[source] = Distance::Finite(0);

    for _ in 0..vertices - 1 {
        let mut updated = false;
        for edge in edges {
            if let Some(candidate) = relax(&dist, edge)? {
                dist[edge.to] = candidate;
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    // V-th pass: negative cycle check
    for edge in edges {
        if relax(&dist, edge)?.is_some() {
            return Ok(BellmanFord::NegativeCycle);
        }
    }

    Ok(BellmanFord::ShortestPaths(dist))
}
