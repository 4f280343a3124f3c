//! Weighted rating computation from raw stat lines.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DEFENSIVE_WEIGHT, DEFAULT_OFFENSIVE_WEIGHT, DEFAULT_THREE_POINT_WEIGHT,
};
use crate::error::{SimError, Stage};
use crate::team::{Conference, RatedTeam, TeamStatLine};

/// Weights applied to the three rating terms.
///
/// Values are used exactly as supplied; they are not required to sum to 1
/// and are never renormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightingConfig {
    pub offensive: f64,
    pub defensive: f64,
    pub three_point: f64,
}

impl WeightingConfig {
    pub fn new(offensive: f64, defensive: f64, three_point: f64) -> Self {
        WeightingConfig {
            offensive,
            defensive,
            three_point,
        }
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("offensive", self.offensive),
            ("defensive", self.defensive),
            ("three-point", self.three_point),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SimError::InvalidWeighting {
                    stage: Stage::Ratings,
                    weight: name,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for WeightingConfig {
    fn default() -> Self {
        WeightingConfig {
            offensive: DEFAULT_OFFENSIVE_WEIGHT,
            defensive: DEFAULT_DEFENSIVE_WEIGHT,
            three_point: DEFAULT_THREE_POINT_WEIGHT,
        }
    }
}

/// Convert one stat line into a rated team.
///
/// The defensive term is inverted so that a lower defensive rating raises
/// the scalar, making higher uniformly better across all three terms.
fn rate_team(line: &TeamStatLine, weighting: &WeightingConfig) -> Result<RatedTeam, SimError> {
    let invalid = |reason: &str| SimError::InvalidStat {
        stage: Stage::Ratings,
        team: line.name.clone(),
        reason: reason.to_string(),
    };

    let conference = Conference::from_label(&line.conference)
        .ok_or_else(|| invalid(&format!("unknown conference label {:?}", line.conference)))?;

    if !line.offensive_rating.is_finite()
        || !line.defensive_rating.is_finite()
        || !line.three_point_pct.is_finite()
    {
        return Err(invalid("non-finite stat value"));
    }
    if line.defensive_rating == 0.0 {
        return Err(invalid("defensive rating of zero cannot be inverted"));
    }

    let weighted_rating = line.offensive_rating * weighting.offensive
        + (1.0 / line.defensive_rating) * weighting.defensive
        + line.three_point_pct * weighting.three_point;

    Ok(RatedTeam {
        name: line.name.clone(),
        conference,
        offensive_rating: line.offensive_rating,
        defensive_rating: line.defensive_rating,
        three_point_pct: line.three_point_pct,
        wins: line.wins,
        losses: line.losses,
        weighted_rating,
    })
}

/// Compute weighted ratings for a full set of stat lines.
///
/// Input order is preserved; seeding order is applied by the bracket stage.
///
/// # Errors
/// `InvalidWeighting` for a negative weight, `InvalidStat` for an unknown
/// conference label, a non-finite stat, or a zero defensive rating.
pub fn compute_ratings(
    stats: &[TeamStatLine],
    weighting: &WeightingConfig,
) -> Result<Vec<RatedTeam>, SimError> {
    weighting.validate()?;
    stats.iter().map(|line| rate_team(line, weighting)).collect()
}

/// Teams of one conference in seed order: descending weighted rating, ties
/// broken by winning percentage, then name, so replays are stable.
pub fn rank_conference(teams: &[RatedTeam], conference: Conference) -> Vec<RatedTeam> {
    let mut ranked: Vec<RatedTeam> = teams
        .iter()
        .filter(|t| t.conference == conference)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        b.weighted_rating
            .partial_cmp(&a.weighted_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.win_pct()
                    .partial_cmp(&a.win_pct())
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked
}
