use serde::{Deserialize, Serialize};

/// Point labels for a normal game, indexed by points modulo 4.
pub const POINT_LABELS: [&str; 4] = ["0", "15", "30", "40"];

/// Snapshot of a player's counters, used to restore an in-progress match.
/// Missing fields default to zero so partial restores are valid.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Games won so far in the match
    #[serde(default)]
    pub games: u32,
    /// Points scored so far in the current game
    #[serde(default)]
    pub points: u32,
}

/// Represents one side of a tennis match with their point and game counters.
/// Counters only move through the mutators below; the owning match drives
/// them as points are recorded.
#[derive(Debug, Clone)]
pub struct Player {
    /// Player identifier, unique within a match
    name: String,
    /// Points scored in the current game
    points: u32,
    /// Games won in the match
    games: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self::with_state(name, PlayerState::default())
    }

    pub fn with_state(name: &str, state: PlayerState) -> Self {
        Self {
            name: name.to_string(),
            points: state.points,
            games: state.games,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn points(&self) -> u32 {
        self.points
    }
    pub fn games(&self) -> u32 {
        self.games
    }

    /// Maps the current points onto the conventional 0/15/30/40 sequence.
    /// Wraps modulo 4 past 40, so the label is only meaningful while the
    /// game is being scored normally (not in deuce or tiebreak accounting).
    pub fn point_label(&self) -> &'static str {
        POINT_LABELS[(self.points % 4) as usize]
    }

    pub fn add_point(&mut self) {
        self.points = self.points.saturating_add(1);
    }

    pub fn add_game(&mut self) {
        self.games = self.games.saturating_add(1);
    }

    /// Starts a fresh game: points go back to zero, games are kept.
    pub fn new_game(&mut self) {
        self.points = 0;
    }

    /// Clears both counters. Not part of normal match flow.
    pub fn reset(&mut self) {
        self.points = 0;
        self.games = 0;
    }
}
