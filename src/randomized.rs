use crate::partition_util::InitialPartitioningMethod;
use crate::{Graph, MaxCutError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct RandomizedConfig {
    /// The seed for the random number generator.
    pub rng_seed: u64,
    /// How many independent random cuts are averaged.
    pub runs: u32,
}

impl Default for RandomizedConfig {
    fn default() -> Self {
        Self {
            rng_seed: 1234,
            runs: 30,
        }
    }
}

impl Graph {
    /// Returns the mean weight of `config.runs` uniformly random cuts.
    pub fn randomized_cut(&self, config: &RandomizedConfig) -> Result<f64> {
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        self.randomized_cut_with_rng(config.runs, &mut rng)
    }

    /// Same as [`Graph::randomized_cut`], drawing the coin flips from `rng`.
    pub fn randomized_cut_with_rng<R: Rng + ?Sized>(&self, runs: u32, rng: &mut R) -> Result<f64> {
        if runs == 0 {
            return Err(MaxCutError::InvalidRuns);
        }

        let mut total = 0u64;
        for run in 0..runs {
            let partition = self.partition_initial(InitialPartitioningMethod::Random, rng);
            let cut = self.calculate_cut_weight(&partition);
            log::trace!("randomized run: {run}, cut: {cut}");
            total += cut;
        }

        let mean = total as f64 / runs as f64;
        log::debug!("randomized mean cut over {runs} runs: {mean}");
        Ok(mean)
    }
}
