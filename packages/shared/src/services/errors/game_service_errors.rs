use crate::repositories::errors::{
    game_repository_errors::GameRepositoryError, player_repository_errors::PlayerRepositoryError,
};
use crate::services::errors::referee_service_errors::RefereeServiceError;

#[derive(Debug)]
pub enum GameServiceError {
    Referee(RefereeServiceError),
    ValidationError(String),
    GameNotFound,
    Conflict,
    RepositoryError(String),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::Referee(err) => write!(f, "{}", err),
            GameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::Conflict => {
                write!(f, "Game was updated by another request, please retry")
            }
            GameServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<RefereeServiceError> for GameServiceError {
    fn from(err: RefereeServiceError) -> Self {
        GameServiceError::Referee(err)
    }
}

impl From<GameRepositoryError> for GameServiceError {
    fn from(err: GameRepositoryError) -> Self {
        match err {
            GameRepositoryError::NotFound => GameServiceError::GameNotFound,
            GameRepositoryError::Conflict => GameServiceError::Conflict,
            _ => GameServiceError::RepositoryError(err.to_string()),
        }
    }
}

impl From<PlayerRepositoryError> for GameServiceError {
    fn from(err: PlayerRepositoryError) -> Self {
        GameServiceError::RepositoryError(err.to_string())
    }
}
