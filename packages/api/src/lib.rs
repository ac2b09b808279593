use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

/// Builds the HTTP application. `admin_routes` mounts the create, update
/// and delete endpoints for players and games.
pub fn app(state: state::AppState, admin_routes: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::games::routes(admin_routes))
        .merge(routes::players::routes(admin_routes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
