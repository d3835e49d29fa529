use crate::partition_util::best_side;
use crate::{Graph, MaxCutError, Partition, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SemiGreedyConfig {
    /// The seed for the random number generator.
    pub rng_seed: u64,
    /// Bias of the restricted candidate list. 0 admits every unassigned vertex, 1 only the best.
    pub alpha: f64,
}

impl Default for SemiGreedyConfig {
    fn default() -> Self {
        Self {
            rng_seed: 1234,
            alpha: 0.7,
        }
    }
}

pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&alpha) {
        return Err(MaxCutError::InvalidAlpha(alpha));
    }
    Ok(())
}

struct Candidate {
    vx: u32,
    score: u64,
}

impl Graph {
    /// Cut weight of a single semi-greedy construction.
    pub fn semi_greedy_cut(&self, config: &SemiGreedyConfig) -> Result<u64> {
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        let partition = self.partition_semi_greedy(config.alpha, &mut rng)?;
        Ok(self.calculate_cut_weight(&partition))
    }

    /// Builds a cut by repeatedly drawing from a restricted candidate list.
    ///
    /// Starting from the split heaviest edge, every step scores each unassigned vertex by the
    /// crossing weight it would add on its better side. With `wmin` and `wmax` the extreme
    /// scores, the list holds the vertices scoring at least `wmin + alpha * (wmax - wmin)`.
    /// One of them is drawn uniformly and placed on its better side (ties go to A).
    ///
    /// At `alpha == 1` the first listed vertex is taken instead of a random one, which makes the
    /// construction independent of `rng`.
    pub fn partition_semi_greedy<R: Rng + ?Sized>(
        &self,
        alpha: f64,
        rng: &mut R,
    ) -> Result<Partition> {
        check_alpha(alpha)?;

        let mut assignment = self.seed_assignment();
        let mut unassigned: Vec<u32> = (0..self.vertex_count() as u32)
            .filter(|&vx| assignment[vx as usize].is_none())
            .collect();
        let mut candidates = Vec::with_capacity(unassigned.len());
        let mut rcl = Vec::with_capacity(unassigned.len());

        while !unassigned.is_empty() {
            candidates.clear();
            let mut wmin = u64::MAX;
            let mut wmax = 0;
            for &vx in unassigned.iter() {
                let (into_a, into_b) = self.side_weights(&assignment, vx);
                let score = into_a.max(into_b);
                wmin = wmin.min(score);
                wmax = wmax.max(score);
                candidates.push(Candidate { vx, score });
            }

            let mu = wmin as f64 + alpha * (wmax - wmin) as f64;
            rcl.clear();
            rcl.extend(
                candidates
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.score as f64 >= mu)
                    .map(|(pos, _)| pos),
            );
            if rcl.is_empty() {
                // Only reachable through floating point rounding of `mu`. Take the best scorer,
                // lowest index first.
                log::trace!("empty candidate list at mu {mu}, falling back to best score");
                rcl.push(first_best(&candidates));
            }

            let pick = if alpha >= 1.0 {
                rcl[0]
            } else {
                rcl[rng.gen_range(0..rcl.len())]
            };
            let vx = candidates[pick].vx;
            let (into_a, into_b) = self.side_weights(&assignment, vx);
            assignment[vx as usize] = Some(best_side(into_a, into_b));
            // `candidates` mirrors `unassigned` position by position.
            unassigned.remove(pick);
        }

        Ok(Partition::from_assignment(assignment))
    }
}

/// Position of the highest scoring candidate; ties go to the earliest position.
fn first_best(candidates: &[Candidate]) -> usize {
    let mut best = 0;
    for (pos, c) in candidates.iter().enumerate() {
        if c.score > candidates[best].score {
            best = pos;
        }
    }
    best
}
