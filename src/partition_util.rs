use crate::Graph;
use rand::Rng;

/// One of the two sides of a cut.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A complete two-way assignment of vertices, indexed by vertex.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Partition {
    sides: Vec<Side>,
}

impl Partition {
    pub fn from_sides(sides: Vec<Side>) -> Self {
        Self { sides }
    }

    pub fn filled(vertex_count: usize, side: Side) -> Self {
        Self {
            sides: vec![side; vertex_count],
        }
    }

    /// Assigns every vertex by an independent fair coin flip.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, vertex_count: usize) -> Self {
        Self {
            sides: (0..vertex_count).map(|_| random_side(rng)).collect(),
        }
    }

    /// Turns a construction-time assignment into a partition.
    ///
    /// # Panics
    /// Panics if a vertex is still unassigned; constructors only call this after placing every
    /// vertex.
    pub(crate) fn from_assignment(assignment: Vec<Option<Side>>) -> Self {
        Self {
            sides: assignment
                .into_iter()
                .map(|s| s.expect("unassigned vertex"))
                .collect(),
        }
    }

    pub fn side(&self, vx: u32) -> Side {
        self.sides[vx as usize]
    }

    pub fn flip(&mut self, vx: u32) {
        let s = &mut self.sides[vx as usize];
        *s = s.opposite();
    }

    /// Returns the same cut with both sides swapped.
    pub fn inverted(&self) -> Self {
        Self {
            sides: self.sides.iter().map(|s| s.opposite()).collect(),
        }
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Vertices on the given side, in index order.
    pub fn members(&self, side: Side) -> impl Iterator<Item = u32> + '_ {
        self.sides
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| s == side)
            .map(|(vx, _)| vx as u32)
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InitialPartitioningMethod {
    /// Every vertex is placed by a fair coin flip.
    Random,
    /// The endpoints of the heaviest edge are placed on opposite sides, all other vertices by a
    /// fair coin flip.
    SeededRandom,
}

impl Graph {
    pub fn partition_initial<R: Rng + ?Sized>(
        &self,
        method: InitialPartitioningMethod,
        rng: &mut R,
    ) -> Partition {
        match method {
            InitialPartitioningMethod::Random => Partition::random(rng, self.vertex_count()),
            InitialPartitioningMethod::SeededRandom => {
                let mut assignment = self.seed_assignment();
                for s in assignment.iter_mut().filter(|s| s.is_none()) {
                    *s = Some(random_side(rng));
                }
                Partition::from_assignment(assignment)
            }
        }
    }

    /// Starts a construction: the heaviest edge's endpoints go to A and B, the rest is unassigned.
    pub(crate) fn seed_assignment(&self) -> Vec<Option<Side>> {
        let mut assignment = vec![None; self.vertex_count()];
        if let Some((u, v)) = self.max_weight_edge() {
            assignment[u as usize] = Some(Side::A);
            assignment[v as usize] = Some(Side::B);
        }
        assignment
    }

    /// Returns the weight of the edges from `vx` into already assigned vertices, as
    /// `(into A, into B)`.
    pub(crate) fn side_weights(&self, assignment: &[Option<Side>], vx: u32) -> (u64, u64) {
        let mut into_a = 0;
        let mut into_b = 0;
        for e in self.neighbors_of(vx).iter() {
            match assignment[e.dst as usize] {
                Some(Side::A) => into_a += e.weight as u64,
                Some(Side::B) => into_b += e.weight as u64,
                None => {}
            }
        }
        (into_a, into_b)
    }
}

fn random_side<R: Rng + ?Sized>(rng: &mut R) -> Side {
    if rng.gen_bool(0.5) {
        Side::A
    } else {
        Side::B
    }
}

/// Picks the side on which a vertex adds the most crossing weight. Joining A crosses the edges
/// into B and vice versa. Ties go to A.
pub(crate) fn best_side(into_a: u64, into_b: u64) -> Side {
    if into_b >= into_a {
        Side::A
    } else {
        Side::B
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn best_side_prefers_a_on_ties() {
        assert_eq!(best_side(0, 0), Side::A);
        assert_eq!(best_side(2, 2), Side::A);
        assert_eq!(best_side(1, 3), Side::A);
        assert_eq!(best_side(3, 1), Side::B);
    }

    #[test]
    fn seed_assignment_splits_heaviest_edge() {
        let g = test_graphs::four_cycle();
        let assignment = g.seed_assignment();
        assert_eq!(assignment, vec![Some(Side::A), Some(Side::B), None, None]);
        assert_eq!(g.side_weights(&assignment, 2), (0, 1));
        assert_eq!(g.side_weights(&assignment, 3), (1, 0));
    }

    #[test]
    fn seeded_random_keeps_seed_apart() {
        let g = test_graphs::four_cycle();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let p = g.partition_initial(InitialPartitioningMethod::SeededRandom, &mut rng);
            assert_eq!(p.len(), 4);
            assert_eq!(p.side(0), Side::A);
            assert_eq!(p.side(1), Side::B);
        }
    }

    #[test]
    fn inverted_partition_has_same_cut() {
        let g = test_graphs::four_cycle();
        let mut rng = StdRng::seed_from_u64(5);
        let p = g.partition_initial(InitialPartitioningMethod::Random, &mut rng);
        assert_eq!(
            g.calculate_cut_weight(&p),
            g.calculate_cut_weight(&p.inverted())
        );
    }

    #[test]
    #[should_panic(expected = "unassigned vertex")]
    fn incomplete_assignment_is_not_a_partition() {
        Partition::from_assignment(vec![Some(Side::A), None, Some(Side::B)]);
    }

    #[test]
    fn members_lists_vertices_in_order() {
        let p = Partition::from_sides(vec![Side::B, Side::A, Side::B, Side::A]);
        assert_eq!(p.members(Side::A).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(p.members(Side::B).collect::<Vec<_>>(), vec![0, 2]);
    }
}
