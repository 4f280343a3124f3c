//! Single-game resolution between two rated teams.

use serde::{Deserialize, Serialize};

use crate::constants::{HOME_COURT_BONUS, LUCK_SPREAD};
use crate::error::{SimError, Stage};
use crate::rng::RandomSource;
use crate::team::RatedTeam;

/// Which of the two named teams won a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// One resolved game within a series or play-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based game index within its series
    pub game: u8,

    /// Name of the winning team
    pub winner: String,

    /// Whether the first-named team held home court for this game
    pub home_first: bool,
}

/// Probability of team A winning given both effective ratings.
///
/// # Errors
/// `InvalidRating` when the combined rating is not positive; the ratio
/// model is undefined there.
pub fn win_probability(
    team_a: &RatedTeam,
    team_b: &RatedTeam,
    eff_a: f64,
    eff_b: f64,
    stage: Stage,
) -> Result<f64, SimError> {
    let combined = eff_a + eff_b;
    if combined <= 0.0 {
        return Err(SimError::InvalidRating {
            stage,
            team_a: team_a.name.clone(),
            team_b: team_b.name.clone(),
            combined,
        });
    }
    Ok(eff_a / combined)
}

/// Resolve a single game.
///
/// The luck term, when enabled, is one uniform draw mapped onto
/// `[-LUCK_SPREAD, LUCK_SPREAD]` and added to both sides; it models
/// game-to-game variance, not bias. The home bonus goes to team A when
/// `home_a`, otherwise to team B. Consumes one draw for the outcome, plus
/// one for luck when enabled, in that order: luck first.
pub fn play_game<R: RandomSource>(
    team_a: &RatedTeam,
    team_b: &RatedTeam,
    home_a: bool,
    use_luck: bool,
    stage: Stage,
    rng: &mut R,
) -> Result<Side, SimError> {
    let luck = if use_luck {
        (rng.next_f64() * 2.0 - 1.0) * LUCK_SPREAD
    } else {
        0.0
    };

    let eff_a = team_a.weighted_rating + luck + if home_a { HOME_COURT_BONUS } else { 0.0 };
    let eff_b = team_b.weighted_rating + luck + if home_a { 0.0 } else { HOME_COURT_BONUS };

    let p_a = win_probability(team_a, team_b, eff_a, eff_b, stage)?;
    if rng.next_f64() < p_a {
        Ok(Side::A)
    } else {
        Ok(Side::B)
    }
}
