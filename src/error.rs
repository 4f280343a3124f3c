//! Simulation errors, each stamped with the stage that detected it.

use std::fmt;

use crate::team::Conference;

/// Stage of a simulation run, used to locate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Rating computation from raw stat lines
    Ratings,
    /// Play-in mini-bracket for seeds 7-10
    PlayIn,
    /// Conference bracket round (1-3)
    Round(u8),
    /// Championship series between conference champions
    Finals,
    /// Ad hoc single series outside a bracket run
    Exhibition,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Ratings => write!(f, "rating computation"),
            Stage::PlayIn => write!(f, "play-in"),
            Stage::Round(n) => write!(f, "round {}", n),
            Stage::Finals => write!(f, "finals"),
            Stage::Exhibition => write!(f, "exhibition series"),
        }
    }
}

/// Errors surfaced by the simulation engine.
///
/// None of these are retried internally; a failed run produces no partial
/// result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("{stage}: invalid stat for {team}: {reason}")]
    InvalidStat {
        stage: Stage,
        team: String,
        reason: String,
    },

    #[error("{stage}: {weight} weight must be non-negative and finite, got {value}")]
    InvalidWeighting {
        stage: Stage,
        weight: &'static str,
        value: f64,
    },

    #[error("{stage}: combined rating {combined} for {team_a} vs {team_b} is not positive")]
    InvalidRating {
        stage: Stage,
        team_a: String,
        team_b: String,
        combined: f64,
    },

    #[error("{stage}: missing rating data for {team}")]
    MissingTeamData { stage: Stage, team: String },

    #[error("{stage}: {conference} conference supplied {actual} teams, {required} required")]
    InsufficientTeams {
        stage: Stage,
        conference: Conference,
        required: usize,
        actual: usize,
    },

    #[error("{stage}: {remaining} teams left to pair")]
    PairingError { stage: Stage, remaining: usize },
}
