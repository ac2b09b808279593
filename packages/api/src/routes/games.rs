use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lambda_http::tracing::{debug, warn};

use crate::{error::ApiError, extract::AppJson, state::AppState};
use shared::models::game::requests::{
    CreateGameForPlayersRequest, CreateGameRequest, MakeMoveRequest,
};
use shared::models::game::responses::GameResponse;

/// Game routes. Create and delete by id are only reachable with `admin`;
/// otherwise games change solely through moves and restarts.
pub fn routes(admin: bool) -> Router<AppState> {
    let mut collection = get(list_games);
    let mut item = get(get_game);
    if admin {
        collection = collection.post(create_game_for_players);
        item = item.delete(delete_game);
    }

    Router::new()
        .route("/create-game/", post(create_game))
        .route("/games/", collection)
        .route("/games/{id}/", item)
        .route("/games/{id}/make_move/", post(make_move))
        .route("/games/{id}/restart_game/", post(restart_game))
}

async fn create_game(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGameRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    state
        .game_service
        .create_game(
            payload.player1_name.as_deref(),
            payload.player2_name.as_deref(),
        )
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Failed to create game: {}", e);
            ApiError::from(e)
        })
}

async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameResponse>>, ApiError> {
    state
        .game_service
        .list_games()
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    state
        .game_service
        .get_game(&game_id)
        .await
        .map(Json)
        .map_err(|e| {
            debug!("Failed to retrieve game {}: {}", game_id, e);
            ApiError::from(e)
        })
}

async fn make_move(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    AppJson(payload): AppJson<MakeMoveRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    let game = state
        .game_service
        .make_move(
            &game_id,
            payload.player_id.as_deref(),
            payload.movement.as_deref(),
        )
        .await?;
    debug!(
        "Move by {:?} recorded in game {}",
        payload.player_id, game_id
    );
    Ok(Json(game))
}

async fn restart_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    state
        .game_service
        .restart_game(&game_id)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Failed to restart game {}: {}", game_id, e);
            ApiError::from(e)
        })
}

async fn create_game_for_players(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGameForPlayersRequest>,
) -> Result<Json<GameResponse>, ApiError> {
    state
        .game_service
        .create_game_for_players(payload.player1_id.as_deref(), payload.player2_id.as_deref())
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .game_service
        .delete_game(&game_id)
        .await
        .map_err(ApiError::from)?;
    debug!("Game deleted successfully: {}", game_id);
    Ok(StatusCode::NO_CONTENT)
}
