use std::fmt;

#[derive(Debug)]
pub enum PlayerServiceError {
    RepositoryError(String),
    PlayerNotFound,
    /// The player still takes part in at least one game.
    PlayerInUse,
    ValidationError(String),
}

impl fmt::Display for PlayerServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            PlayerServiceError::PlayerNotFound => write!(f, "Player not found"),
            PlayerServiceError::PlayerInUse => {
                write!(f, "Player is part of existing games and cannot be deleted")
            }
            PlayerServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for PlayerServiceError {}
