//! Dense O(V^2) Dijkstra.
//!
//! Variables:
//!   dist[v]  = tentative distance from source
//!   vis[v]   = v has been extracted
//!
//! Equations:
//!   repeat at most V-1 times:
//!     u = argmin { dist[v] : !vis[v], dist[v] reachable }   (lowest index on ties)
//!     stop if no such u
//!     vis[u] = true
//!     for v with w(u,v) > 0 and !vis[v]:
//!       dist[v] = min(dist[v], dist[u] + w(u,v))            (strict)

use super::{check_vertex, DenseGraph, Distance};
use crate::error::{AlgoError, Result};

pub fn dijkstra(graph: &DenseGraph, source: usize) -> Result<Vec<Distance>> {
    let n = graph.vertex_count();
    check_vertex(source, n)?;

    let mut dist = vec![Distance::Unreachable; n];
    let mut visited = vec![false; n];
    dist[source] = Distance::Finite(0);

    for _ in 0..n - 1 {
        let Some((u, du)) = closest_unvisited(&dist, &visited) else {
            break;
        };
        visited[u] = true;

        for (v, w) in graph.neighbours(u) {
            if visited[v] {
                continue;
            }
            let candidate = Distance::Finite(
                du.checked_add(w).ok_or(AlgoError::Overflow("dijkstra relaxation"))?,
            );
            if candidate < dist[v] {
                dist[v] = candidate;
            }
        }
    }
    Ok(dist)
}

/// Unvisited vertex with the smallest finite distance, lowest index on ties.
fn closest_unvisited(dist: &[Distance], visited: &[bool]) -> Option<(usize, i64)> {
    let mut next: Option<(usize, i64)> = None;
    for (v, d) in dist.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Distance::Finite(d) = *d {
            if next.map_or(true, |(_, best)| d < best) {
                next = Some((v, d));
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, rows: &[i64]) -> DenseGraph {
        DenseGraph::from_rows(n, rows.to_vec()).unwrap()
    }

    #[test]
    fn shortest_paths_through_cheaper_detour() {
        #[rustfmt::skip]
        let g = graph(4, &[
            0, 4, 1, 0,
            0, 0, 0, 1,
            0, 2, 0, 5,
            0, 0, 0, 0,
        ]);
        let dist = dijkstra(&g, 0).unwrap();
        assert_eq!(
            dist,
            vec![
                Distance::Finite(0),
                Distance::Finite(3),
                Distance::Finite(1),
                Distance::Finite(4)
            ]
        );
    }

    #[test]
    fn unreachable_vertex_stays_unreachable() {
        #[rustfmt::skip]
        let g = graph(3, &[
            0, 7, 0,
            7, 0, 0,
            0, 0, 0,
        ]);
        let dist = dijkstra(&g, 0).unwrap();
        assert_eq!(dist[2], Distance::Unreachable);
        assert_eq!(dist[1], Distance::Finite(7));
    }

    #[test]
    fn single_vertex() {
        assert_eq!(dijkstra(&graph(1, &[0]), 0).unwrap(), vec![Distance::Finite(0)]);
    }

    #[test]
    fn source_out_of_range() {
        assert_eq!(
            dijkstra(&graph(1, &[0]), 3),
            Err(AlgoError::VertexOutOfRange { vertex: 3, vertices: 1 })
        );
    }

    #[test]
    fn equal_distances_pick_the_lowest_index() {
        let dist = [
            Distance::Finite(0),
            Distance::Finite(5),
            Distance::Unreachable,
            Distance::Finite(5),
        ];
        assert_eq!(closest_unvisited(&dist, &[true, false, false, false]), Some((1, 5)));
        assert_eq!(closest_unvisited(&dist, &[true, true, false, false]), Some((3, 5)));
    }

    #[test]
    fn no_candidate_once_only_unreachable_vertices_remain() {
        let dist = [Distance::Finite(0), Distance::Unreachable, Distance::Unreachable];
        assert_eq!(closest_unvisited(&dist, &[true, false, false]), None);
    }

    #[test]
    fn isolated_source_leaves_everything_unreachable() {
        #[rustfmt::skip]
        let g = graph(3, &[
            0, 0, 0,
            0, 0, 3,
            0, 0, 0,
        ]);
        assert_eq!(
            dijkstra(&g, 0).unwrap(),
            vec![Distance::Finite(0), Distance::Unreachable, Distance::Unreachable]
        );
    }
}
