use std::sync::Arc;

use tracing::info;

use crate::models::player::Player;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::player_repository::PlayerRepository;
use crate::services::errors::player_service_errors::PlayerServiceError;

pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
    games: Arc<dyn GameRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(
        repository: Arc<dyn PlayerRepository + Send + Sync>,
        games: Arc<dyn GameRepository + Send + Sync>,
    ) -> Self {
        PlayerService { repository, games }
    }

    pub async fn create_player(&self, name: Option<&str>) -> Result<Player, PlayerServiceError> {
        let name = required_name(name)?;
        let player = Player::new(name);
        self.repository
            .create_player(&player)
            .await
            .map_err(|e| PlayerServiceError::RepositoryError(e.to_string()))?;
        info!("Player created: {}", player.id);
        Ok(player)
    }

    pub async fn get_player(&self, player_id: &str) -> Result<Player, PlayerServiceError> {
        if player_id.is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Player ID cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_player(player_id)
            .await
            .map_err(|e| match e {
                PlayerRepositoryError::NotFound => PlayerServiceError::PlayerNotFound,
                _ => PlayerServiceError::RepositoryError(e.to_string()),
            })
    }

    pub async fn list_players(&self) -> Result<Vec<Player>, PlayerServiceError> {
        let mut players = self
            .repository
            .list_players()
            .await
            .map_err(|e| PlayerServiceError::RepositoryError(e.to_string()))?;
        players.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(players)
    }

    pub async fn update_player(
        &self,
        player_id: &str,
        name: Option<&str>,
    ) -> Result<Player, PlayerServiceError> {
        let name = required_name(name)?;

        let mut player = self.get_player(player_id).await?;
        player.name = name.to_string();

        self.repository
            .update_player(&player)
            .await
            .map_err(|e| match e {
                PlayerRepositoryError::NotFound => PlayerServiceError::PlayerNotFound,
                _ => PlayerServiceError::RepositoryError(e.to_string()),
            })?;
        Ok(player)
    }

    pub async fn delete_player(&self, player_id: &str) -> Result<(), PlayerServiceError> {
        if player_id.is_empty() {
            return Err(PlayerServiceError::ValidationError(
                "Player ID cannot be empty".to_string(),
            ));
        }

        let in_use = self
            .games
            .list_games()
            .await
            .map_err(|e| PlayerServiceError::RepositoryError(e.to_string()))?
            .iter()
            .any(|game| game.involves(player_id));
        if in_use {
            return Err(PlayerServiceError::PlayerInUse);
        }

        self.repository
            .delete_player(player_id)
            .await
            .map_err(|e| match e {
                PlayerRepositoryError::NotFound => PlayerServiceError::PlayerNotFound,
                _ => PlayerServiceError::RepositoryError(e.to_string()),
            })?;
        info!("Player deleted: {}", player_id);
        Ok(())
    }
}

fn required_name(name: Option<&str>) -> Result<&str, PlayerServiceError> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(PlayerServiceError::ValidationError(
            "Player name cannot be empty".to_string(),
        )),
    }
}
