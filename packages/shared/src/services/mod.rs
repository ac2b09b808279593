pub mod errors;
pub mod game_service;
pub mod player_service;
pub mod referee_service;
