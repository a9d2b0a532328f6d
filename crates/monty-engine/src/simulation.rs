//! Batch simulation of many independent trials

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::door::Door;
use crate::error::MontyError;
use crate::random::{Seed, SeededRng};
use crate::trial::{play_trial, Strategy};

/// Stream index used for the always-switch batch in [`simulate`]
const SWITCH_STREAM: u32 = 0;
/// Stream index used for the never-switch batch in [`simulate`]
const STAY_STREAM: u32 = 1;

/// Parameters for a two-strategy simulation run
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub trials: u64,
    pub seed: Seed,
}

impl SimulationConfig {
    /// 1000 trials per strategy
    pub fn standard(seed: Seed) -> Self {
        Self { trials: 1000, seed }
    }

    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn validate(&self) -> Result<(), MontyError> {
        if self.trials == 0 {
            return Err(MontyError::ZeroTrials);
        }
        Ok(())
    }
}

/// Win rates of both strategies over the same number of trials
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub trials: u64,
    pub switch_win_rate: f64,
    pub stay_win_rate: f64,
}

/// Play trial `index` of a batch on its own derived stream
fn trial_wins(rng: &SeededRng, index: u64, strategy: Strategy) -> bool {
    let mut trial_rng = rng.for_trial(index);
    let pick = Door::random(&mut trial_rng);
    play_trial(pick, strategy, &mut trial_rng).outcome.is_win()
}

fn win_percentage(wins: u64, trials: u64) -> f64 {
    100.0 * wins as f64 / trials as f64
}

/// Percentage of `num_trials` games won under a fixed strategy
///
/// Every trial gets a fresh arrangement and a uniformly random first pick.
pub fn simulate_win_rate(
    rng: &SeededRng,
    num_trials: u64,
    switch: bool,
) -> Result<f64, MontyError> {
    if num_trials == 0 {
        return Err(MontyError::ZeroTrials);
    }
    let strategy = Strategy::from_switch(switch);

    let wins = (0..num_trials)
        .filter(|i| trial_wins(rng, *i, strategy))
        .count() as u64;

    let rate = win_percentage(wins, num_trials);
    debug!(num_trials, ?strategy, wins, rate, "batch simulated");
    Ok(rate)
}

/// Same result as [`simulate_win_rate`], spread across the rayon pool
#[cfg(feature = "parallel")]
pub fn simulate_win_rate_parallel(
    rng: &SeededRng,
    num_trials: u64,
    switch: bool,
) -> Result<f64, MontyError> {
    use rayon::prelude::*;

    if num_trials == 0 {
        return Err(MontyError::ZeroTrials);
    }
    let strategy = Strategy::from_switch(switch);

    let wins = (0..num_trials)
        .into_par_iter()
        .filter(|i| trial_wins(rng, *i, strategy))
        .count() as u64;

    let rate = win_percentage(wins, num_trials);
    debug!(num_trials, ?strategy, wins, rate, "parallel batch simulated");
    Ok(rate)
}

/// Run both strategies for `config.trials` games each
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport, MontyError> {
    config.validate()?;

    let switch_rng = SeededRng::new(&config.seed, SWITCH_STREAM);
    let stay_rng = SeededRng::new(&config.seed, STAY_STREAM);

    #[cfg(feature = "parallel")]
    let (switch_win_rate, stay_win_rate) = (
        simulate_win_rate_parallel(&switch_rng, config.trials, true)?,
        simulate_win_rate_parallel(&stay_rng, config.trials, false)?,
    );
    #[cfg(not(feature = "parallel"))]
    let (switch_win_rate, stay_win_rate) = (
        simulate_win_rate(&switch_rng, config.trials, true)?,
        simulate_win_rate(&stay_rng, config.trials, false)?,
    );

    Ok(SimulationReport {
        trials: config.trials,
        switch_win_rate,
        stay_win_rate,
    })
}
