use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, extract::AppJson, state::AppState};
use shared::models::player::requests::{CreatePlayerRequest, UpdatePlayerRequest};
use shared::models::player::Player;

/// Player routes. Reads are public; writes need `admin`.
pub fn routes(admin: bool) -> Router<AppState> {
    let mut collection = get(list_players);
    let mut item = get(get_player);
    if admin {
        collection = collection.post(create_player);
        item = item.put(update_player).delete(delete_player);
    }

    Router::new()
        .route("/players/", collection)
        .route("/players/{id}/", item)
}

async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<Player>>, ApiError> {
    state
        .player_service
        .list_players()
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    state
        .player_service
        .get_player(&player_id)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

async fn create_player(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = state
        .player_service
        .create_player(payload.name.as_deref())
        .await
        .map_err(|e| {
            error!("Failed to create player: {}", e);
            ApiError::from(e)
        })?;
    Ok((StatusCode::CREATED, Json(player)))
}

async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    AppJson(payload): AppJson<UpdatePlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    state
        .player_service
        .update_player(&player_id, payload.name.as_deref())
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to update player {}: {}", player_id, e);
            ApiError::from(e)
        })
}

async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .player_service
        .delete_player(&player_id)
        .await
        .map_err(|e| {
            error!("Failed to delete player {}: {}", player_id, e);
            ApiError::from(e)
        })?;
    debug!("Player deleted successfully: {}", player_id);
    Ok(StatusCode::NO_CONTENT)
}
