use std::fmt;

use serde::{Deserialize, Serialize};

/// Conference a team competes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    /// Both conferences in result order.
    pub const ALL: [Conference; 2] = [Conference::Eastern, Conference::Western];

    /// Parse a conference label as supplied by the statistics provider.
    ///
    /// Accepts `"Eastern"`/`"East"` and `"Western"`/`"West"` in any case.
    /// Unknown labels are an input error, never defaulted.
    pub fn from_label(label: &str) -> Option<Conference> {
        match label.trim().to_ascii_lowercase().as_str() {
            "eastern" | "east" => Some(Conference::Eastern),
            "western" | "west" => Some(Conference::Western),
            _ => None,
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::Eastern => write!(f, "Eastern"),
            Conference::Western => write!(f, "Western"),
        }
    }
}

/// Per-team statistical input for one simulation run.
///
/// Supplied by the statistics provider; the conference arrives as the raw
/// feed label and is validated during rating computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatLine {
    pub name: String,
    pub conference: String,

    /// Points scored per 100 possessions
    pub offensive_rating: f64,

    /// Points allowed per 100 possessions (lower is better)
    pub defensive_rating: f64,

    /// Three-point field goal percentage (0.0-1.0)
    pub three_point_pct: f64,

    pub wins: u32,
    pub losses: u32,
}

impl TeamStatLine {
    pub fn new(
        name: impl Into<String>,
        conference: impl Into<String>,
        offensive_rating: f64,
        defensive_rating: f64,
        three_point_pct: f64,
        wins: u32,
        losses: u32,
    ) -> Self {
        TeamStatLine {
            name: name.into(),
            conference: conference.into(),
            offensive_rating,
            defensive_rating,
            three_point_pct,
            wins,
            losses,
        }
    }
}

/// A stat line with its validated conference and derived weighted rating.
///
/// Produced by rating computation, read-only downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedTeam {
    pub name: String,
    pub conference: Conference,
    pub offensive_rating: f64,
    pub defensive_rating: f64,
    pub three_point_pct: f64,
    pub wins: u32,
    pub losses: u32,

    /// Scalar rating combining the weighted stat terms; higher is better
    pub weighted_rating: f64,
}

impl RatedTeam {
    /// Regular-season winning percentage; 0 for a team with no games.
    pub fn win_pct(&self) -> f64 {
        let played = self.wins + self.losses;
        if played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(played)
        }
    }

    /// Whether a usable rating is present.
    pub fn is_rated(&self) -> bool {
        self.weighted_rating.is_finite()
    }
}

impl fmt::Display for RatedTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {:.4}, {}-{})",
            self.name, self.conference, self.weighted_rating, self.wins, self.losses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_labels() {
        assert_eq!(Conference::from_label("Eastern"), Some(Conference::Eastern));
        assert_eq!(Conference::from_label("west"), Some(Conference::Western));
        assert_eq!(Conference::from_label(" East "), Some(Conference::Eastern));
        assert_eq!(Conference::from_label("Atlantic"), None);
        assert_eq!(Conference::from_label(""), None);
    }

    #[test]
    fn test_win_pct() {
        let mut team = RatedTeam {
            name: "Hawks".to_string(),
            conference: Conference::Eastern,
            offensive_rating: 114.0,
            defensive_rating: 112.0,
            three_point_pct: 0.36,
            wins: 41,
            losses: 41,
            weighted_rating: 34.3,
        };
        assert!((team.win_pct() - 0.5).abs() < 1e-12);

        team.wins = 0;
        team.losses = 0;
        assert_eq!(team.win_pct(), 0.0);
    }

    #[test]
    fn test_is_rated() {
        let mut team = RatedTeam {
            name: "Jazz".to_string(),
            conference: Conference::Western,
            offensive_rating: 110.0,
            defensive_rating: 113.0,
            three_point_pct: 0.35,
            wins: 30,
            losses: 52,
            weighted_rating: 33.1,
        };
        assert!(team.is_rated());
        team.weighted_rating = f64::NAN;
        assert!(!team.is_rated());
    }
}
