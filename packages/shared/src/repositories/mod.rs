pub mod errors;
pub mod game_repository;
pub mod memory_repository;
pub mod player_repository;
