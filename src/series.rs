//! Best-of-seven series resolution.

use serde::{Deserialize, Serialize};

use crate::constants::{FIRST_NAMED_HOME_GAMES, MAX_SERIES_GAMES, SERIES_TARGET_WINS};
use crate::error::{SimError, Stage};
use crate::game::{play_game, GameRecord, Side};
use crate::rng::RandomSource;
use crate::team::RatedTeam;

/// Outcome of one best-of-seven series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// First-named team; holds home court in games 1, 2, 5 and 7 when
    /// home-court advantage is enabled
    pub team_a: RatedTeam,
    pub team_b: RatedTeam,
    pub winner: RatedTeam,
    pub wins_a: u8,
    pub wins_b: u8,

    /// Game-by-game log, length 4-7
    pub games: Vec<GameRecord>,
}

impl SeriesResult {
    /// Series score as `"4-2"` from the winner's perspective.
    pub fn score_line(&self) -> String {
        let (w, l) = if self.wins_a > self.wins_b {
            (self.wins_a, self.wins_b)
        } else {
            (self.wins_b, self.wins_a)
        };
        format!("{}-{}", w, l)
    }
}

/// Simulate a best-of-seven series between two rated teams.
///
/// Team A is the first-named (higher-seeded) side. Games run from 1 until
/// either side reaches four wins; at most seven are played. Fails fast with
/// `MissingTeamData` when either team is unrated, before any game resolves.
pub fn simulate_series<R: RandomSource>(
    team_a: &RatedTeam,
    team_b: &RatedTeam,
    use_luck_factor: bool,
    use_home_court_advantage: bool,
    stage: Stage,
    rng: &mut R,
) -> Result<SeriesResult, SimError> {
    for team in [team_a, team_b] {
        if !team.is_rated() {
            return Err(SimError::MissingTeamData {
                stage,
                team: team.name.clone(),
            });
        }
    }

    let mut wins_a: u8 = 0;
    let mut wins_b: u8 = 0;
    let mut games = Vec::with_capacity(MAX_SERIES_GAMES as usize);

    for game in 1..=MAX_SERIES_GAMES {
        let home_a = use_home_court_advantage && FIRST_NAMED_HOME_GAMES.contains(&game);
        let side = play_game(team_a, team_b, home_a, use_luck_factor, stage, rng)?;

        let winner_name = match side {
            Side::A => {
                wins_a += 1;
                &team_a.name
            }
            Side::B => {
                wins_b += 1;
                &team_b.name
            }
        };
        games.push(GameRecord {
            game,
            winner: winner_name.clone(),
            home_first: home_a,
        });

        if wins_a == SERIES_TARGET_WINS || wins_b == SERIES_TARGET_WINS {
            break;
        }
    }

    let winner = if wins_a == SERIES_TARGET_WINS {
        team_a.clone()
    } else {
        team_b.clone()
    };
    tracing::debug!(
        team_a = %team_a.name,
        team_b = %team_b.name,
        winner = %winner.name,
        games = games.len(),
        "series decided"
    );

    Ok(SeriesResult {
        team_a: team_a.clone(),
        team_b: team_b.clone(),
        winner,
        wins_a,
        wins_b,
        games,
    })
}
