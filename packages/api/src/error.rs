use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lambda_http::tracing::error;
use shared::models::game::responses::ErrorResponse;
use shared::services::errors::{
    game_service_errors::GameServiceError, player_service_errors::PlayerServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
    PlayerService(PlayerServiceError),
    /// The request body could not be read as the expected JSON.
    InvalidBody(String),
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<PlayerServiceError> for ApiError {
    fn from(error: PlayerServiceError) -> Self {
        ApiError::PlayerService(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::GameService(
                GameServiceError::Referee(_) | GameServiceError::ValidationError(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::GameService(GameServiceError::GameNotFound) => StatusCode::NOT_FOUND,
            ApiError::GameService(GameServiceError::Conflict) => StatusCode::CONFLICT,
            ApiError::GameService(GameServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::PlayerService(PlayerServiceError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PlayerService(PlayerServiceError::PlayerNotFound) => StatusCode::NOT_FOUND,
            ApiError::PlayerService(PlayerServiceError::PlayerInUse) => StatusCode::CONFLICT,
            ApiError::PlayerService(PlayerServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::GameService(err) => err.to_string(),
            ApiError::PlayerService(err) => err.to_string(),
            ApiError::InvalidBody(msg) => format!("Invalid request body: {}", msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Store failures are logged in full but never echoed to the client.
        let message = if status.is_server_error() {
            error!("Internal error: {}", self.message());
            "Internal server error".to_string()
        } else {
            self.message()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
