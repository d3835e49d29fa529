// Max-Cut approximation using randomized, greedy and semi-greedy construction,
// single-flip local search and GRASP.

use std::collections::HashMap;

mod error;
mod grasp;
mod greedy;
mod loading;
mod local_search;
mod partition_util;
mod randomized;
mod semi_greedy;

pub use error::{MaxCutError, Result};
pub use grasp::{GraspConfig, GraspResult};
pub use local_search::{LocalSearchConfig, LocalSearchOutcome, LocalSearchSummary};
pub use partition_util::{InitialPartitioningMethod, Partition, Side};
pub use randomized::RandomizedConfig;
pub use semi_greedy::SemiGreedyConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    pub dst: u32,
    pub weight: u32,
}

/// An undirected edge as it was registered, `src` and `dst` in insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphEdgeRecord {
    pub src: u32,
    pub dst: u32,
    pub weight: u32,
}

#[derive(Clone, Debug, Default)]
pub struct GraphVertex {
    pub edges: Vec<GraphEdge>,
}

/// Weighted undirected graph without self-loops or parallel edges.
///
/// Every edge lives in the edge list, in the adjacency of both endpoints and in the weight
/// lookup, which is keyed by the canonical pair `(min, max)`.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<GraphVertex>,
    edges: Vec<GraphEdgeRecord>,
    weights: HashMap<(u32, u32), u32>,
}

#[inline]
fn canonical_pair(u: u32, v: u32) -> (u32, u32) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

impl Graph {
    /// Creates a graph without edges. Vertices are addressed by `u32`, so `vertex_count` must
    /// fit into one.
    pub fn new(vertex_count: usize) -> Self {
        debug_assert!(
            vertex_count <= u32::MAX as usize,
            "vertex count {vertex_count} exceeds u32 range"
        );
        Self {
            vertices: vec![GraphVertex::default(); vertex_count],
            edges: vec![],
            weights: HashMap::new(),
        }
    }

    /// Registers the undirected edge `{u, v}` with weight `w`.
    pub fn add_edge(&mut self, u: u32, v: u32, w: i64) -> Result<()> {
        for vertex in [u, v] {
            if vertex as usize >= self.vertices.len() {
                return Err(MaxCutError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        if u == v {
            return Err(MaxCutError::SelfLoop { vertex: u });
        }
        if w < 0 {
            return Err(MaxCutError::NegativeWeight {
                src: u,
                dst: v,
                weight: w,
            });
        }
        let weight = u32::try_from(w).map_err(|_| MaxCutError::WeightOverflow {
            src: u,
            dst: v,
            weight: w,
        })?;

        let key = canonical_pair(u, v);
        if self.weights.contains_key(&key) {
            return Err(MaxCutError::DuplicateEdge { src: u, dst: v });
        }

        self.weights.insert(key, weight);
        self.edges.push(GraphEdgeRecord {
            src: u,
            dst: v,
            weight,
        });
        self.vertices[u as usize].edges.push(GraphEdge { dst: v, weight });
        self.vertices[v as usize].edges.push(GraphEdge { dst: u, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn neighbors_of(&self, vx: u32) -> &[GraphEdge] {
        &self.vertices[vx as usize].edges
    }

    /// Returns the weight of the edge `{u, v}`, or 0 if the two vertices are not adjacent.
    ///
    /// A missing edge and an edge of weight zero are indistinguishable on purpose: both
    /// contribute nothing to any cut.
    pub fn weight_or_zero(&self, u: u32, v: u32) -> u32 {
        self.weights
            .get(&canonical_pair(u, v))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the endpoints of the heaviest edge. On ties the edge registered first wins.
    pub fn max_weight_edge(&self) -> Option<(u32, u32)> {
        let mut best: Option<&GraphEdgeRecord> = None;
        for e in self.edges.iter() {
            if best.map_or(true, |b| e.weight > b.weight) {
                best = Some(e);
            }
        }
        best.map(|e| (e.src, e.dst))
    }

    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| e.weight as u64).sum()
    }

    /// Sum of the weights of all edges incident to `vx`.
    pub fn degree_weight(&self, vx: u32) -> u64 {
        self.neighbors_of(vx).iter().map(|e| e.weight as u64).sum()
    }

    /// Sums the weights of all edges whose endpoints lie on different sides.
    ///
    /// # Panics
    /// Panics if the partition does not cover every vertex; use
    /// [`Graph::checked_cut_weight`] for untrusted partitions.
    pub fn calculate_cut_weight(&self, partition: &Partition) -> u64 {
        let mut cut = 0;
        for e in self.edges.iter() {
            if partition.side(e.src) != partition.side(e.dst) {
                cut += e.weight as u64;
            }
        }
        cut
    }

    pub fn checked_cut_weight(&self, partition: &Partition) -> Result<u64> {
        self.check_partition(partition)?;
        Ok(self.calculate_cut_weight(partition))
    }

    pub(crate) fn check_partition(&self, partition: &Partition) -> Result<()> {
        if partition.len() != self.vertex_count() {
            return Err(MaxCutError::PartitionSizeMismatch {
                expected: self.vertex_count(),
                actual: partition.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition_util::test_graphs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn add_edge_registers_both_directions() {
        let mut g = Graph::new(3);
        g.add_edge(0, 2, 7).unwrap();

        assert_eq!(g.weight_or_zero(0, 2), 7);
        assert_eq!(g.weight_or_zero(2, 0), 7);
        assert_eq!(g.neighbors_of(0), &[GraphEdge { dst: 2, weight: 7 }]);
        assert_eq!(g.neighbors_of(2), &[GraphEdge { dst: 0, weight: 7 }]);
        assert!(g.neighbors_of(1).is_empty());
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree_weight(2), 7);
        assert_eq!(g.degree_weight(1), 0);
        assert_eq!(g.total_weight(), 7);
    }

    #[test]
    fn missing_edge_weighs_zero() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 4).unwrap();
        assert_eq!(g.weight_or_zero(1, 2), 0);
        assert_eq!(g.weight_or_zero(0, 2), 0);
    }

    #[test]
    fn add_edge_rejects_invalid_edges() {
        let mut g = Graph::new(3);
        assert!(matches!(
            g.add_edge(1, 1, 1),
            Err(MaxCutError::SelfLoop { vertex: 1 })
        ));
        assert!(matches!(
            g.add_edge(0, 1, -2),
            Err(MaxCutError::NegativeWeight { weight: -2, .. })
        ));
        assert!(matches!(
            g.add_edge(0, 3, 1),
            Err(MaxCutError::VertexOutOfRange { vertex: 3, .. })
        ));
        assert!(matches!(
            g.add_edge(0, 1, i64::from(u32::MAX) + 1),
            Err(MaxCutError::WeightOverflow { .. })
        ));

        g.add_edge(0, 1, 1).unwrap();
        assert!(matches!(
            g.add_edge(1, 0, 3),
            Err(MaxCutError::DuplicateEdge { src: 1, dst: 0 })
        ));
        // Rejected edges leave no trace.
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight_or_zero(0, 1), 1);
    }

    #[test]
    fn max_weight_edge_prefers_first_seen() {
        let mut g = Graph::new(4);
        assert_eq!(g.max_weight_edge(), None);
        g.add_edge(0, 1, 2).unwrap();
        g.add_edge(3, 2, 9).unwrap();
        g.add_edge(1, 2, 9).unwrap();
        assert_eq!(g.max_weight_edge(), Some((3, 2)));
    }

    #[test]
    fn cut_weight_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let g = test_graphs::random_graph(&mut rng, 12, 0.4, 10);
            let p = Partition::random(&mut rng, g.vertex_count());
            let cut = g.calculate_cut_weight(&p);

            let mut brute = 0u64;
            for u in 0..g.vertex_count() as u32 {
                for v in (u + 1)..g.vertex_count() as u32 {
                    if p.side(u) != p.side(v) {
                        brute += g.weight_or_zero(u, v) as u64;
                    }
                }
            }
            assert_eq!(cut, brute);
            assert!(cut <= g.total_weight());
        }
    }

    #[test]
    fn cut_weight_of_single_side_is_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = test_graphs::random_graph(&mut rng, 8, 0.6, 5);
        let p = Partition::filled(g.vertex_count(), Side::B);
        assert_eq!(g.calculate_cut_weight(&p), 0);
    }

    #[test]
    fn checked_cut_weight_rejects_short_partition() {
        let g = test_graphs::four_cycle();
        let p = Partition::filled(3, Side::A);
        assert!(matches!(
            g.checked_cut_weight(&p),
            Err(MaxCutError::PartitionSizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }
}
