use std::sync::Arc;

use shared::repositories::game_repository::{DynamoDbGameRepository, GameRepository};
use shared::repositories::memory_repository::{InMemoryGameRepository, InMemoryPlayerRepository};
use shared::repositories::player_repository::{DynamoDbPlayerRepository, PlayerRepository};
use shared::services::game_service::GameService;
use shared::services::player_service::PlayerService;

use crate::config::{AppConfig, StorageBackend};

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
    pub player_service: Arc<PlayerService>,
}

impl AppState {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        AppState {
            game_service: Arc::new(GameService::new(games.clone(), players.clone())),
            player_service: Arc::new(PlayerService::new(players, games)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryGameRepository::new()),
            Arc::new(InMemoryPlayerRepository::new()),
        )
    }

    pub async fn from_config(config: &AppConfig) -> Self {
        match &config.storage {
            StorageBackend::DynamoDb {
                games_table,
                players_table,
            } => {
                let aws_config = aws_config::load_from_env().await;
                let client = aws_sdk_dynamodb::Client::new(&aws_config);
                Self::new(
                    Arc::new(DynamoDbGameRepository::new(client.clone(), games_table)),
                    Arc::new(DynamoDbPlayerRepository::new(client, players_table)),
                )
            }
            StorageBackend::Memory => Self::in_memory(),
        }
    }
}
