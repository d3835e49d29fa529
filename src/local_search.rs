use crate::partition_util::InitialPartitioningMethod;
use crate::{Graph, MaxCutError, Partition, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct LocalSearchConfig {
    /// The seed for the random number generator.
    pub rng_seed: u64,
    /// How many random starts are improved and averaged.
    pub runs: u32,
    /// If this is set to Some(n), every search stops after n improving sweeps even if it has
    /// not converged yet.
    pub max_sweeps: Option<u32>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            rng_seed: 1234,
            runs: 5,
            max_sweeps: None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LocalSearchOutcome {
    pub cut_weight: u64,
    /// Number of sweeps that flipped at least one vertex.
    pub sweeps: u32,
    /// False if the sweep limit was hit before a sweep without flips.
    pub converged: bool,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LocalSearchSummary {
    pub mean_cut_weight: f64,
    pub mean_sweeps: f64,
}

impl Graph {
    /// Improves `partition` in place by single vertex flips until no flip increases the cut.
    ///
    /// Each sweep visits the vertices in index order and flips a vertex as soon as its edges
    /// to its own side outweigh its edges to the other side. The flip is visible to every vertex
    /// visited later in the same sweep, so the result depends on the visiting order.
    pub fn local_search(
        &self,
        partition: &mut Partition,
        max_sweeps: Option<u32>,
    ) -> Result<LocalSearchOutcome> {
        self.check_partition(partition)?;

        let mut cut = self.calculate_cut_weight(partition) as i64;
        let mut sweeps = 0;
        let mut converged = false;

        while max_sweeps.map_or(true, |max| sweeps < max) {
            let mut flips = 0;
            for vx in 0..self.vertex_count() as u32 {
                let gain = self.flip_gain(partition, vx);
                if gain > 0 {
                    partition.flip(vx);
                    cut += gain;
                    flips += 1;
                }
            }
            if flips == 0 {
                converged = true;
                break;
            }
            sweeps += 1;
            log::trace!("sweep: {sweeps}, flips: {flips}, cut: {cut}");
        }

        debug_assert_eq!(cut as u64, self.calculate_cut_weight(partition));
        Ok(LocalSearchOutcome {
            cut_weight: cut as u64,
            sweeps,
            converged,
        })
    }

    /// Change of the cut weight if `vx` switched sides: the same side weight minus the opposite
    /// side weight, i.e. the incident weight minus twice the opposite side weight.
    pub fn flip_gain(&self, partition: &Partition, vx: u32) -> i64 {
        let side = partition.side(vx);
        let opposite: u64 = self
            .neighbors_of(vx)
            .iter()
            .filter(|e| partition.side(e.dst) != side)
            .map(|e| e.weight as u64)
            .sum();
        self.degree_weight(vx) as i64 - 2 * opposite as i64
    }

    /// Runs local search from `config.runs` random starts and averages the outcomes.
    ///
    /// Each start splits the heaviest edge and places every other vertex by a coin flip.
    pub fn local_search_random_starts(
        &self,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchSummary> {
        if config.runs == 0 {
            return Err(MaxCutError::InvalidRuns);
        }
        let mut rng = StdRng::seed_from_u64(config.rng_seed);

        let mut total_cut = 0u64;
        let mut total_sweeps = 0u64;
        for run in 0..config.runs {
            let mut partition =
                self.partition_initial(InitialPartitioningMethod::SeededRandom, &mut rng);
            let outcome = self.local_search(&mut partition, config.max_sweeps)?;
            log::trace!(
                "local search run: {run}, cut: {}, sweeps: {}",
                outcome.cut_weight,
                outcome.sweeps
            );
            total_cut += outcome.cut_weight;
            total_sweeps += outcome.sweeps as u64;
        }

        let summary = LocalSearchSummary {
            mean_cut_weight: total_cut as f64 / config.runs as f64,
            mean_sweeps: total_sweeps as f64 / config.runs as f64,
        };
        log::debug!(
            "local search over {} runs: mean cut {}, mean sweeps {}",
            config.runs,
            summary.mean_cut_weight,
            summary.mean_sweeps
        );
        Ok(summary)
    }
}
