pub mod game_service_errors;
pub mod player_service_errors;
pub mod referee_service_errors;
