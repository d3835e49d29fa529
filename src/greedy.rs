use crate::partition_util::best_side;
use crate::{Graph, Partition};

impl Graph {
    /// Builds a cut in a single deterministic pass.
    ///
    /// The heaviest edge is split first. Every other vertex, in index order, joins the side on
    /// which its edges into the already placed vertices add the most crossing weight (ties go
    /// to A). Without edges there is nothing to split and every vertex ends up on A.
    pub fn partition_greedy(&self) -> Partition {
        let mut assignment = self.seed_assignment();

        for vx in 0..self.vertex_count() as u32 {
            if assignment[vx as usize].is_some() {
                continue;
            }
            let (into_a, into_b) = self.side_weights(&assignment, vx);
            assignment[vx as usize] = Some(best_side(into_a, into_b));
        }

        let partition = Partition::from_assignment(assignment);
        log::debug!("greedy cut: {}", self.calculate_cut_weight(&partition));
        partition
    }

    pub fn greedy_cut(&self) -> u64 {
        self.calculate_cut_weight(&self.partition_greedy())
    }
}
