//! # tennis-engine: Tennis Match Scoring Core
//!
//! A scoring state machine for two-player tennis matches: points, games,
//! deuce and advantage, tiebreaks, and match completion, with the running
//! score rendered as a display string. Everything is synchronous, in-memory
//! mutation on small owned state; wiring it to an interface or a store is the
//! caller's concern.
//!
//! ## Core Modules
//!
//! - [`player`] - Player counters, point labels, and restore snapshots
//! - [`rules`] - Scoring mode and the pure game/match decision functions
//! - [`engine`] - Match orchestration, point recording, and score rendering
//! - [`errors`] - Error types for construction and point recording
//!
//! ## Quick Start
//!
//! ```rust
//! use tennis_engine::engine::Match;
//!
//! let mut m = Match::new("player 1", "player 2").unwrap();
//!
//! m.point_won_by("player 1").unwrap();
//! m.point_won_by("player 2").unwrap();
//! assert_eq!(m.score(), "0-0, 15-15");
//!
//! // Three more points take the game at 15
//! for _ in 0..3 {
//!     m.point_won_by("player 1").unwrap();
//! }
//! assert_eq!(m.score(), "1-0");
//! assert!(!m.completed());
//! ```
//!
//! ## Resuming a Match
//!
//! Snapshots serialize with serde, so a match can be restored mid-game:
//!
//! ```rust
//! use tennis_engine::engine::{Match, MatchState};
//! use tennis_engine::player::PlayerState;
//!
//! let state = MatchState {
//!     player1: PlayerState { games: 5, points: 3 },
//!     player2: PlayerState { games: 4, points: 2 },
//!     ..MatchState::default()
//! };
//!
//! let mut m = Match::with_state("player 1", "player 2", state).unwrap();
//! m.point_won_by("player 1").unwrap();
//! assert_eq!(m.score(), "6-4");
//! assert_eq!(m.winner(), Some("player 1"));
//! ```
//!
//! ## Rule Functions
//!
//! The game and match transition rules are exposed as pure functions over
//! player snapshots:
//!
//! ```rust
//! use tennis_engine::player::{Player, PlayerState};
//! use tennis_engine::rules::{has_won_match, is_tiebreak};
//!
//! let p1 = Player::with_state("a", PlayerState { games: 6, points: 0 });
//! let p2 = Player::with_state("b", PlayerState { games: 6, points: 0 });
//! assert!(is_tiebreak(&p1, &p2));
//! assert_eq!(has_won_match(&p1, &p2), None);
//! ```

pub mod engine;
pub mod errors;
pub mod player;
pub mod rules;
