//! Play-in resolution for seeds 7-10 of a conference.

use serde::{Deserialize, Serialize};

use crate::constants::{DIRECT_QUALIFIERS, PLAY_IN_FIELD};
use crate::error::{SimError, Stage};
use crate::game::{play_game, GameRecord, Side};
use crate::rng::RandomSource;
use crate::team::{Conference, RatedTeam};

/// Record of one conference's three-game play-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayInResult {
    /// Games 1-3 of the mini-bracket
    pub games: Vec<GameRecord>,
    pub seventh_seed: RatedTeam,
    pub eighth_seed: RatedTeam,
}

/// Resolve seeds 7-10 into the final 7th and 8th seeds.
///
/// Input is one conference ranked by descending weighted rating; teams
/// ranked 11th or lower are eliminated before the play-in. Single games,
/// not series:
/// - game 1: seed 7 vs seed 8, winner takes the 7th seed, loser to game 3;
/// - game 2: seed 9 vs seed 10, winner to game 3, loser eliminated;
/// - game 3: game-1 loser vs game-2 winner, winner takes the 8th seed.
///
/// When home-court advantage is enabled the better-ranked side of each
/// pairing hosts. Returns the eight bracket seeds in order plus the
/// three-game record.
pub fn resolve_play_in<R: RandomSource>(
    ranked: &[RatedTeam],
    conference: Conference,
    use_luck_factor: bool,
    use_home_court_advantage: bool,
    rng: &mut R,
) -> Result<(Vec<RatedTeam>, PlayInResult), SimError> {
    if ranked.len() < PLAY_IN_FIELD {
        return Err(SimError::InsufficientTeams {
            stage: Stage::PlayIn,
            conference,
            required: PLAY_IN_FIELD,
            actual: ranked.len(),
        });
    }

    let seed7 = &ranked[6];
    let seed8 = &ranked[7];
    let seed9 = &ranked[8];
    let seed10 = &ranked[9];

    let (seventh, g1_loser, game1) =
        single_game(1, seed7, seed8, use_luck_factor, use_home_court_advantage, rng)?;
    let (g2_winner, _, game2) =
        single_game(2, seed9, seed10, use_luck_factor, use_home_court_advantage, rng)?;
    let (eighth, _, game3) = single_game(
        3,
        &g1_loser,
        &g2_winner,
        use_luck_factor,
        use_home_court_advantage,
        rng,
    )?;

    tracing::debug!(
        conference = %conference,
        seventh = %seventh.name,
        eighth = %eighth.name,
        "play-in resolved"
    );

    let mut seeds: Vec<RatedTeam> = ranked[..DIRECT_QUALIFIERS].to_vec();
    seeds.push(seventh.clone());
    seeds.push(eighth.clone());

    Ok((
        seeds,
        PlayInResult {
            games: vec![game1, game2, game3],
            seventh_seed: seventh,
            eighth_seed: eighth,
        },
    ))
}

/// One play-in game. The first-named side is the better-ranked team and
/// hosts when home-court advantage is enabled.
fn single_game<R: RandomSource>(
    game: u8,
    first: &RatedTeam,
    second: &RatedTeam,
    use_luck_factor: bool,
    use_home_court_advantage: bool,
    rng: &mut R,
) -> Result<(RatedTeam, RatedTeam, GameRecord), SimError> {
    let home_first = use_home_court_advantage;
    let side = play_game(first, second, home_first, use_luck_factor, Stage::PlayIn, rng)?;
    let (winner, loser) = match side {
        Side::A => (first.clone(), second.clone()),
        Side::B => (second.clone(), first.clone()),
    };
    let record = GameRecord {
        game,
        winner: winner.name.clone(),
        home_first,
    };
    Ok((winner, loser, record))
}
