//! Process-local stores for running without DynamoDB and for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::game::Game;
use crate::models::player::Player;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::player_repository::PlayerRepository;

#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, Game>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            return Err(GameRepositoryError::AlreadyExists);
        }
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        let games = self.games.read().await;
        Ok(games.get(game_id).cloned())
    }

    async fn update_game(
        &self,
        game: &Game,
        expected_version: u64,
    ) -> Result<(), GameRepositoryError> {
        let mut games = self.games.write().await;
        match games.get(&game.id) {
            None => Err(GameRepositoryError::NotFound),
            Some(stored) if stored.version != expected_version => {
                Err(GameRepositoryError::Conflict)
            }
            Some(_) => {
                games.insert(game.id.clone(), game.clone());
                Ok(())
            }
        }
    }

    async fn list_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let games = self.games.read().await;
        Ok(games.values().cloned().collect())
    }

    async fn delete_game(&self, game_id: &str) -> Result<(), GameRepositoryError> {
        let mut games = self.games.write().await;
        games
            .remove(game_id)
            .map(|_| ())
            .ok_or(GameRepositoryError::NotFound)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<HashMap<String, Player>>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            return Err(PlayerRepositoryError::AlreadyExists);
        }
        players.insert(player.id.clone(), player.clone());
        Ok(())
    }

    async fn get_player(&self, player_id: &str) -> Result<Player, PlayerRepositoryError> {
        let players = self.players.read().await;
        players
            .get(player_id)
            .cloned()
            .ok_or(PlayerRepositoryError::NotFound)
    }

    async fn list_players(&self) -> Result<Vec<Player>, PlayerRepositoryError> {
        let players = self.players.read().await;
        Ok(players.values().cloned().collect())
    }

    async fn update_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        let mut players = self.players.write().await;
        if !players.contains_key(&player.id) {
            return Err(PlayerRepositoryError::NotFound);
        }
        players.insert(player.id.clone(), player.clone());
        Ok(())
    }

    async fn delete_player(&self, player_id: &str) -> Result<(), PlayerRepositoryError> {
        let mut players = self.players.write().await;
        players
            .remove(player_id)
            .map(|_| ())
            .ok_or(PlayerRepositoryError::NotFound)
    }
}
