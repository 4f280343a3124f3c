//! Playoff Core - two-conference basketball playoff simulation engine.
//!
//! Converts per-team statistics into weighted ratings, resolves the
//! play-in, three conference rounds and the finals probabilistically, and
//! returns the complete result tree. Every probabilistic step draws from an
//! injected random source, so seeded runs replay exactly and independent
//! trials parallelize without shared state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod bracket;
pub mod constants;
pub mod error;
pub mod game;
pub mod playin;
pub mod rating;
pub mod rng;
pub mod series;
pub mod team;
pub mod trials;

pub use bracket::{ConferenceResult, PlayoffField, RoundResult, RunLabel, SimulationResult};
pub use error::{SimError, Stage};
pub use game::GameRecord;
pub use playin::PlayInResult;
pub use rating::{compute_ratings, WeightingConfig};
pub use rng::{FixedSource, RandomSource};
pub use series::SeriesResult;
pub use team::{Conference, RatedTeam, TeamStatLine};

/// Simulate one full postseason for a set of rated teams.
///
/// Thin wrapper over [`PlayoffField::simulate`] for callers that do not
/// keep a field around. `None` seeds from entropy.
pub fn run_playoffs(
    rated_teams: &[RatedTeam],
    label: &RunLabel,
    weighting: &WeightingConfig,
    use_luck_factor: bool,
    use_home_court_advantage: bool,
    seed: Option<u64>,
) -> Result<SimulationResult, SimError> {
    PlayoffField::new(
        rated_teams.to_vec(),
        weighting.clone(),
        use_luck_factor,
        use_home_court_advantage,
    )
    .simulate(label, seed)
}

/// Simulate one ad hoc best-of-seven series outside a bracket run, for
/// quick matchup previews.
///
/// The first-named team holds home court in games 1, 2, 5 and 7 when
/// home-court advantage is enabled.
pub fn run_series(
    team_a: &RatedTeam,
    team_b: &RatedTeam,
    use_luck_factor: bool,
    use_home_court_advantage: bool,
    seed: Option<u64>,
) -> Result<SeriesResult, SimError> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    series::simulate_series(
        team_a,
        team_b,
        use_luck_factor,
        use_home_court_advantage,
        Stage::Exhibition,
        &mut rng,
    )
}
