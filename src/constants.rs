/// Rating bonus granted to the home team for a single game
pub const HOME_COURT_BONUS: f64 = 0.03;

/// Half-width of the symmetric per-game luck perturbation
pub const LUCK_SPREAD: f64 = 0.02;

/// Default weight applied to offensive rating
pub const DEFAULT_OFFENSIVE_WEIGHT: f64 = 0.30;

/// Default weight applied to the inverted defensive rating
pub const DEFAULT_DEFENSIVE_WEIGHT: f64 = 0.50;

/// Default weight applied to three-point percentage
pub const DEFAULT_THREE_POINT_WEIGHT: f64 = 0.20;

/// Wins required to take a best-of-seven series
pub const SERIES_TARGET_WINS: u8 = 4;

/// Maximum games in a best-of-seven series
pub const MAX_SERIES_GAMES: u8 = 7;

/// Games in which the first-named (higher-seeded) team holds home court,
/// the standard 2-2-1-1-1 format
pub const FIRST_NAMED_HOME_GAMES: [u8; 4] = [1, 2, 5, 7];

/// Ranked teams a conference must supply to resolve its play-in
pub const PLAY_IN_FIELD: usize = 10;

/// Seeds entering a conference bracket after the play-in
pub const BRACKET_TEAMS: usize = 8;

/// Seeds that qualify for the bracket without a play-in game
pub const DIRECT_QUALIFIERS: usize = 6;

/// Rounds in a conference bracket
pub const CONFERENCE_ROUNDS: u8 = 3;
