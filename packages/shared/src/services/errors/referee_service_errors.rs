use std::fmt;

use crate::models::round::RoundError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefereeServiceError {
    GameFinished,
    InvalidMove(String),
    MissingPlayer(String),
    TurnViolation(RoundError),
}

impl fmt::Display for RefereeServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RefereeServiceError::GameFinished => write!(f, "The game has already finished"),
            RefereeServiceError::InvalidMove(msg) => write!(f, "Invalid move: {}", msg),
            RefereeServiceError::MissingPlayer(msg) => write!(f, "Missing player: {}", msg),
            RefereeServiceError::TurnViolation(err) => write!(f, "Turn violation: {}", err),
        }
    }
}

impl std::error::Error for RefereeServiceError {}

impl From<RoundError> for RefereeServiceError {
    fn from(err: RoundError) -> Self {
        RefereeServiceError::TurnViolation(err)
    }
}
