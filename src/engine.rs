use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::player::{Player, PlayerState};
use crate::rules::{has_advantage, has_won_game, has_won_match, is_deuce, is_tiebreak, Mode};

/// Snapshot of a whole match, used to restore a previously serialized one.
/// Missing fields default, so a partial snapshot (for example only
/// `completed`) is a valid restore. No winner is carried; one is only ever
/// inferred from play.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Counters for the first player
    #[serde(default)]
    pub player1: PlayerState,
    /// Counters for the second player
    #[serde(default)]
    pub player2: PlayerState,
    /// Scoring policy in effect for the current game
    #[serde(default)]
    pub mode: Mode,
    /// Whether the match has already been decided
    #[serde(default)]
    pub completed: bool,
}

/// A two-player tennis match: owns both players' counters, applies point
/// events, and renders the running score.
///
/// # Examples
///
/// ```
/// use tennis_engine::engine::Match;
///
/// let mut m = Match::new("player 1", "player 2").unwrap();
/// assert_eq!(m.score(), "0-0");
///
/// m.point_won_by("player 1").unwrap();
/// assert_eq!(m.score(), "0-0, 15-0");
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    /// Exactly two players; slot order fixes the score display order
    players: [Player; 2],
    /// Scoring policy for the game in progress
    mode: Mode,
    /// Set once the match has been decided
    completed: bool,
    /// Slot index of the match winner, once decided through play
    winner: Option<usize>,
}

impl Match {
    /// Starts a fresh match between two distinctly named players.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPlayers`] if both names are equal.
    pub fn new(player1: &str, player2: &str) -> Result<Self, MatchError> {
        Self::with_state(player1, player2, MatchState::default())
    }

    /// Restores a match from a previously captured [`MatchState`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPlayers`] if both names are equal, and
    /// [`MatchError::InvalidState`] for a normal-mode snapshot with both
    /// players at three points or more: such a position should already have
    /// moved to deuce, and normal-mode win detection can never advance it.
    pub fn with_state(player1: &str, player2: &str, state: MatchState) -> Result<Self, MatchError> {
        if player1 == player2 {
            return Err(MatchError::InvalidPlayers {
                name: player1.to_string(),
            });
        }
        if state.mode == Mode::Normal && state.player1.points >= 3 && state.player2.points >= 3 {
            return Err(MatchError::InvalidState {
                details: format!(
                    "normal mode with points {}-{} is unwinnable, expected deuce",
                    state.player1.points, state.player2.points
                ),
            });
        }
        Ok(Self {
            players: [
                Player::with_state(player1, state.player1),
                Player::with_state(player2, state.player2),
            ],
            mode: state.mode,
            completed: state.completed,
            winner: None,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn completed(&self) -> bool {
        self.completed
    }
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|i| self.players[i].name())
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Records a point for the named player and advances the match state.
    ///
    /// Once the match is completed this is a silent no-op; the score, mode
    /// and winner stay frozen.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::UnknownPlayer`] if `name` is not one of the two
    /// players. State is untouched in that case.
    pub fn point_won_by(&mut self, name: &str) -> Result<(), MatchError> {
        if self.completed {
            return Ok(());
        }
        let idx = match self.index_of(name) {
            Some(idx) => idx,
            None => {
                return Err(MatchError::UnknownPlayer {
                    name: name.to_string(),
                })
            }
        };
        self.players[idx].add_point();
        self.after_point();
        Ok(())
    }

    /// Renders the current score. Always leads with the games tally; while
    /// points are on the board a point segment follows, formatted by mode:
    /// `Deuce`/`Advantage name` in deuce, raw counts in a tiebreak, and the
    /// 0/15/30/40 labels otherwise.
    pub fn score(&self) -> String {
        let [p1, p2] = &self.players;

        // At the start of every game only the games tally is shown
        let games = format!("{}-{}", p1.games(), p2.games());
        if p1.points() == 0 && p2.points() == 0 {
            return games;
        }

        let points = match self.mode {
            Mode::Deuce => match has_advantage(self.mode, p1, p2) {
                Some(name) => format!("Advantage {}", name),
                None => "Deuce".to_string(),
            },
            Mode::Tiebreak => format!("{}-{}", p1.points(), p2.points()),
            Mode::Normal => format!("{}-{}", p1.point_label(), p2.point_label()),
        };
        format!("{}, {}", games, points)
    }

    /// Recomputes the match state after a point has been credited: detects a
    /// game win under the current mode, then a match win, and otherwise
    /// decides the mode the next game (or the rest of this one) is played in.
    fn after_point(&mut self) {
        let game_winner = has_won_game(self.mode, &self.players[0], &self.players[1])
            .and_then(|name| self.index_of(name));

        let idx = match game_winner {
            Some(idx) => idx,
            None => {
                // Game still running; 40-40 flips normal scoring into deuce
                if is_deuce(self.mode, &self.players[0], &self.players[1]) {
                    self.mode = Mode::Deuce;
                }
                return;
            }
        };

        self.players[idx].add_game();
        let match_winner = has_won_match(&self.players[0], &self.players[1])
            .and_then(|name| self.index_of(name));
        match match_winner {
            Some(widx) => {
                // Mode is left frozen at whatever the final game was
                self.winner = Some(widx);
                self.completed = true;
            }
            None => {
                self.mode = if is_tiebreak(&self.players[0], &self.players[1]) {
                    Mode::Tiebreak
                } else {
                    Mode::Normal
                };
            }
        }

        // The concluded game's points come off the board either way
        for p in &mut self.players {
            p.new_game();
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }
}
