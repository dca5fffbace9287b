use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Minimum points a player must reach before a tiebreak game can be won.
pub const TIEBREAK_MIN_POINTS: u32 = 7;

/// Minimum games a player must reach before the match can be won.
pub const MIN_GAMES: u32 = 6;

/// Scoring policy currently in effect for the game being played.
/// A match starts in [`Mode::Normal`] and moves between modes as games
/// conclude or deuce is reached.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    /// Conventional 0/15/30/40 scoring
    #[default]
    Normal,
    /// Both players at 40 or beyond, win by two points
    Deuce,
    /// Raw point scoring at six games all
    Tiebreak,
}

/// Whether the current game is in deuce territory: both players at 40 (three
/// points) or beyond. Advantage states still satisfy this predicate. Never
/// holds during a tiebreak, where points are raw counts.
pub fn is_deuce(mode: Mode, p1: &Player, p2: &Player) -> bool {
    mode != Mode::Tiebreak && p1.points() >= 3 && p2.points() >= 3
}

/// Whether the next game must be a tiebreak. This is the exact six games all
/// situation, checked as a game concludes.
pub fn is_tiebreak(p1: &Player, p2: &Player) -> bool {
    p1.games() == 6 && p2.games() == 6
}

/// Returns the name of the player holding advantage, if any.
///
/// A player has advantage when the game is in deuce and they lead on points.
/// Used only for score rendering; game wins are decided by [`has_won_game`].
pub fn has_advantage<'a>(mode: Mode, p1: &'a Player, p2: &'a Player) -> Option<&'a str> {
    if !is_deuce(mode, p1, p2) {
        return None;
    }
    if p1.points() > p2.points() {
        Some(p1.name())
    } else if p2.points() > p1.points() {
        Some(p2.name())
    } else {
        None
    }
}

/// Decides whether the current game has been won, under the scoring policy
/// for `mode`.
///
/// The ways a player wins a game:
///
/// - [`Mode::Normal`]: the player reaches four points while their opponent
///   is still below three. Four points against three is not a win here; both
///   players at three or more is deuce territory, which the match handles by
///   switching mode instead.
/// - [`Mode::Deuce`]: the player leads by two points (advantage plus the
///   winning point).
/// - [`Mode::Tiebreak`]: at least one player has reached
///   [`TIEBREAK_MIN_POINTS`], and the leader is two points clear, the same
///   margin rule as deuce.
///
/// # Arguments
///
/// * `mode` - scoring policy in effect for this game
/// * `p1` - player one
/// * `p2` - player two
///
/// # Returns
///
/// The winner's name, or `None` while the game is still running.
///
/// # Examples
///
/// ```
/// use tennis_engine::player::{Player, PlayerState};
/// use tennis_engine::rules::{has_won_game, Mode};
///
/// let p1 = Player::with_state("a", PlayerState { games: 0, points: 4 });
/// let p2 = Player::with_state("b", PlayerState { games: 0, points: 1 });
/// assert_eq!(has_won_game(Mode::Normal, &p1, &p2), Some("a"));
///
/// // Two clear points are needed once past deuce
/// let p1 = Player::with_state("a", PlayerState { games: 0, points: 4 });
/// let p2 = Player::with_state("b", PlayerState { games: 0, points: 3 });
/// assert_eq!(has_won_game(Mode::Deuce, &p1, &p2), None);
///
/// // A tiebreak needs the minimum points and the margin
/// let p1 = Player::with_state("a", PlayerState { games: 6, points: 7 });
/// let p2 = Player::with_state("b", PlayerState { games: 6, points: 6 });
/// assert_eq!(has_won_game(Mode::Tiebreak, &p1, &p2), None);
/// ```
pub fn has_won_game<'a>(mode: Mode, p1: &'a Player, p2: &'a Player) -> Option<&'a str> {
    match mode {
        Mode::Tiebreak => {
            if p1.points() < TIEBREAK_MIN_POINTS && p2.points() < TIEBREAK_MIN_POINTS {
                return None;
            }
            margin_winner(p1, p2)
        }
        Mode::Deuce => margin_winner(p1, p2),
        Mode::Normal => {
            if p1.points() > 3 && p2.points() < 3 {
                Some(p1.name())
            } else if p2.points() > 3 && p1.points() < 3 {
                Some(p2.name())
            } else {
                None
            }
        }
    }
}

/// Decides whether the match has been won. A player must reach [`MIN_GAMES`]
/// and be two games clear of their opponent. At six games all this yields
/// `None` and a tiebreak decides the next game; winning that tiebreak still
/// leaves the margin at one, so play continues until a two-game lead exists.
pub fn has_won_match<'a>(p1: &'a Player, p2: &'a Player) -> Option<&'a str> {
    if p1.games() < MIN_GAMES && p2.games() < MIN_GAMES {
        return None;
    }
    if p1.games() > p2.games() + 1 {
        Some(p1.name())
    } else if p2.games() > p1.games() + 1 {
        Some(p2.name())
    } else {
        None
    }
}

/// Two-point margin rule shared by deuce and tiebreak scoring.
fn margin_winner<'a>(p1: &'a Player, p2: &'a Player) -> Option<&'a str> {
    if p1.points() > p2.points() + 1 {
        Some(p1.name())
    } else if p2.points() > p1.points() + 1 {
        Some(p2.name())
    } else {
        None
    }
}
