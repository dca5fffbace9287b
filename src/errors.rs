use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Unknown player: {name}")]
    UnknownPlayer { name: String },
    #[error("Players must have distinct names, got {name:?} twice")]
    InvalidPlayers { name: String },
    #[error("Invalid restored state: {details}")]
    InvalidState { details: String },
}
