use crate::semi_greedy::check_alpha;
use crate::{Graph, MaxCutError, Partition, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct GraspConfig {
    /// The seed for the random number generator.
    pub rng_seed: u64,
    /// Bias of the restricted candidate list used by every construction.
    pub alpha: f64,
    /// The number of construction and improvement trials.
    pub iterations: u32,
    /// If this is set to Some(n), the local search of each trial stops after n improving sweeps.
    pub max_sweeps: Option<u32>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            rng_seed: 1234,
            alpha: 0.7,
            iterations: 10,
            max_sweeps: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraspResult {
    pub best_cut_weight: u64,
    /// The first partition that reached `best_cut_weight`.
    pub best_partition: Partition,
    /// Improving local search sweeps per trial, averaged over all trials.
    pub mean_sweeps: f64,
    /// Cut weight after local search, one entry per trial.
    pub trial_cut_weights: Vec<u64>,
}

impl Graph {
    pub fn grasp(&self, config: &GraspConfig) -> Result<GraspResult> {
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        self.grasp_with_rng(config, &mut rng)
    }

    /// Repeats semi-greedy construction followed by local search and keeps the best cut.
    ///
    /// A later trial only replaces the incumbent if it is strictly better.
    pub fn grasp_with_rng<R: Rng + ?Sized>(
        &self,
        config: &GraspConfig,
        rng: &mut R,
    ) -> Result<GraspResult> {
        check_alpha(config.alpha)?;
        if config.iterations == 0 {
            return Err(MaxCutError::InvalidIterations);
        }

        let mut best_cut_weight = 0;
        let mut best_partition: Option<Partition> = None;
        let mut total_sweeps = 0u64;
        let mut trial_cut_weights = Vec::with_capacity(config.iterations as usize);

        for iteration in 0..config.iterations {
            let mut partition = self.partition_semi_greedy(config.alpha, rng)?;
            let outcome = self.local_search(&mut partition, config.max_sweeps)?;
            log::trace!(
                "grasp iteration: {iteration}, cut: {}, sweeps: {}",
                outcome.cut_weight,
                outcome.sweeps
            );

            total_sweeps += outcome.sweeps as u64;
            trial_cut_weights.push(outcome.cut_weight);

            if best_partition.is_none() || outcome.cut_weight > best_cut_weight {
                log::debug!("grasp iteration: {iteration}, new best cut: {}", outcome.cut_weight);
                best_cut_weight = outcome.cut_weight;
                best_partition = Some(partition);
            }
        }

        let mean_sweeps = total_sweeps as f64 / config.iterations as f64;
        Ok(GraspResult {
            best_cut_weight,
            best_partition: best_partition.ok_or(MaxCutError::InvalidIterations)?,
            mean_sweeps,
            trial_cut_weights,
        })
    }
}
