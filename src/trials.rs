//! Parallel Monte Carlo trials over independent playoff runs.
//!
//! A single run is sequential by nature (each round feeds the next), but
//! independent runs share nothing mutable, so trials fan out across the
//! rayon pool with one isolated generator per trial.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::bracket::{PlayoffField, RunLabel, SimulationResult};
use crate::error::SimError;

impl PlayoffField {
    /// Run `n_simulations` independent trials.
    ///
    /// Per-trial sub-seeds are drawn from a master generator before
    /// dispatch, so results are deterministic for a given master seed no
    /// matter how the pool schedules the work. The first failing trial
    /// aborts the batch.
    pub fn run_simulations(
        &self,
        label: &RunLabel,
        n_simulations: usize,
        seed: Option<u64>,
    ) -> Result<Vec<SimulationResult>, SimError> {
        let mut master = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        let sub_seeds: Vec<u64> = (0..n_simulations).map(|_| master.gen()).collect();

        tracing::debug!(n_simulations, "dispatching playoff trials");
        sub_seeds
            .into_par_iter()
            .map(|s| self.simulate(label, Some(s)))
            .collect()
    }

    /// Championship probability per team, estimated by title frequency
    /// over `n_simulations` trials.
    pub fn championship_odds(
        &self,
        label: &RunLabel,
        n_simulations: usize,
        seed: Option<u64>,
    ) -> Result<HashMap<String, f64>, SimError> {
        let runs = self.run_simulations(label, n_simulations, seed)?;
        let mut odds: HashMap<String, f64> = HashMap::new();
        for run in &runs {
            *odds.entry(run.champion.name.clone()).or_insert(0.0) += 1.0;
        }
        for count in odds.values_mut() {
            *count /= n_simulations as f64;
        }
        Ok(odds)
    }
}
