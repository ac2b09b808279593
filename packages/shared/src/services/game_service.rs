use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, error, info, warn};

use crate::{
    models::{
        game::{responses::GameResponse, Game},
        player::Player,
    },
    repositories::{
        errors::player_repository_errors::PlayerRepositoryError,
        game_repository::GameRepository, player_repository::PlayerRepository,
    },
    services::{
        errors::game_service_errors::GameServiceError, referee_service::RefereeService,
    },
};

/// Runs each game command as load, validate, mutate, persist.
///
/// Commands on the same game id are serialized by a per-game lock that only
/// lives while some command holds or awaits it. The store also rejects
/// writes whose version went stale, which covers other processes sharing the
/// table.
pub struct GameService {
    games: Arc<dyn GameRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
    referee: RefereeService,
    locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        GameService {
            games,
            players,
            referee: RefereeService::new(),
            locks: StdMutex::new(HashMap::new()),
        }
    }

    pub async fn create_game(
        &self,
        player1_name: Option<&str>,
        player2_name: Option<&str>,
    ) -> Result<GameResponse, GameServiceError> {
        let (name1, name2) = match (non_blank(player1_name), non_blank(player2_name)) {
            (Some(name1), Some(name2)) => (name1, name2),
            _ => {
                return Err(GameServiceError::ValidationError(
                    "Both player names are required".to_string(),
                ))
            }
        };

        let player1 = Player::new(name1);
        let player2 = Player::new(name2);
        self.players.create_player(&player1).await?;
        if let Err(e) = self.players.create_player(&player2).await {
            self.discard_players(&[&player1]).await;
            return Err(e.into());
        }

        let game = Game::new(&player1.id, &player2.id);
        if let Err(e) = self.games.create_game(&game).await {
            self.discard_players(&[&player1, &player2]).await;
            return Err(e.into());
        }

        info!(
            "Game {} created between {} and {}",
            game.id, player1.id, player2.id
        );
        Ok(GameResponse::new(&game, &player1, &player2))
    }

    pub async fn create_game_for_players(
        &self,
        player1_id: Option<&str>,
        player2_id: Option<&str>,
    ) -> Result<GameResponse, GameServiceError> {
        let (id1, id2) = match (non_blank(player1_id), non_blank(player2_id)) {
            (Some(id1), Some(id2)) if id1 != id2 => (id1, id2),
            (Some(_), Some(_)) => {
                return Err(GameServiceError::ValidationError(
                    "A game needs two different players".to_string(),
                ))
            }
            _ => {
                return Err(GameServiceError::ValidationError(
                    "Both player IDs are required".to_string(),
                ))
            }
        };

        let player1 = self.existing_player(id1).await?;
        let player2 = self.existing_player(id2).await?;

        let game = Game::new(&player1.id, &player2.id);
        self.games.create_game(&game).await?;

        info!("Game {} created for existing players", game.id);
        Ok(GameResponse::new(&game, &player1, &player2))
    }

    pub async fn get_game(&self, game_id: &str) -> Result<GameResponse, GameServiceError> {
        let game = self.load(game_id).await?;
        self.render(&game).await
    }

    /// All games, newest first.
    pub async fn list_games(&self) -> Result<Vec<GameResponse>, GameServiceError> {
        let mut games = self.games.list_games().await?;
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let players: HashMap<String, Player> = self
            .players
            .list_players()
            .await?
            .into_iter()
            .map(|player| (player.id.clone(), player))
            .collect();

        games
            .iter()
            .map(|game| {
                let player1 = lookup(&players, &game.player1_id)?;
                let player2 = lookup(&players, &game.player2_id)?;
                Ok(GameResponse::new(game, player1, player2))
            })
            .collect()
    }

    pub async fn make_move(
        &self,
        game_id: &str,
        player_id: Option<&str>,
        movement: Option<&str>,
    ) -> Result<GameResponse, GameServiceError> {
        let _guard = self.lock(game_id).await;

        let mut game = self.load(game_id).await?;
        let outcome = self
            .referee
            .make_move(&mut game, player_id, movement)
            .map_err(|e| {
                warn!("Move rejected in game {}: {}", game_id, e);
                GameServiceError::from(e)
            })?;

        self.save(&mut game).await?;
        debug!(
            "Move accepted in game {} (outcome: {:?}, score {}-{})",
            game.id, outcome, game.player1_score, game.player2_score
        );
        self.render(&game).await
    }

    /// Replaces the game with a fresh one between the same players. The old
    /// game is deactivated if it was still running. The successor is written
    /// first and removed again if the predecessor cannot be updated.
    pub async fn restart_game(&self, game_id: &str) -> Result<GameResponse, GameServiceError> {
        let _guard = self.lock(game_id).await;

        let mut previous = self.load(game_id).await?;
        let was_active = previous.is_active;
        let next = self.referee.restart(&mut previous);

        self.games.create_game(&next).await?;
        if was_active {
            if let Err(e) = self.save(&mut previous).await {
                if let Err(cleanup) = self.games.delete_game(&next.id).await {
                    error!(
                        "Failed to discard game {} after restart of {} failed: {}",
                        next.id, game_id, cleanup
                    );
                }
                return Err(e);
            }
        }
        info!("Game {} restarted as {}", game_id, next.id);

        self.render(&next).await
    }

    pub async fn delete_game(&self, game_id: &str) -> Result<(), GameServiceError> {
        let _guard = self.lock(game_id).await;
        self.games.delete_game(game_id).await?;
        info!("Game {} deleted", game_id);
        Ok(())
    }

    async fn lock(&self, game_id: &str) -> GameLock<'_> {
        let game_lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks
                .entry(game_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        GameLock {
            locks: &self.locks,
            game_id: game_id.to_string(),
            guard: Some(game_lock.lock_owned().await),
        }
    }

    async fn discard_players(&self, players: &[&Player]) {
        for player in players {
            if let Err(e) = self.players.delete_player(&player.id).await {
                error!("Failed to discard player {}: {}", player.id, e);
            }
        }
    }

    async fn load(&self, game_id: &str) -> Result<Game, GameServiceError> {
        if game_id.is_empty() {
            return Err(GameServiceError::GameNotFound);
        }
        self.games
            .get_game(game_id)
            .await?
            .ok_or(GameServiceError::GameNotFound)
    }

    async fn save(&self, game: &mut Game) -> Result<(), GameServiceError> {
        let expected_version = game.version;
        game.version += 1;
        self.games
            .update_game(game, expected_version)
            .await
            .map_err(GameServiceError::from)
    }

    async fn existing_player(&self, player_id: &str) -> Result<Player, GameServiceError> {
        self.players
            .get_player(player_id)
            .await
            .map_err(|e| match e {
                PlayerRepositoryError::NotFound => GameServiceError::ValidationError(format!(
                    "Player {} does not exist",
                    player_id
                )),
                _ => GameServiceError::from(e),
            })
    }

    async fn render(&self, game: &Game) -> Result<GameResponse, GameServiceError> {
        let player1 = self.players.get_player(&game.player1_id).await?;
        let player2 = self.players.get_player(&game.player2_id).await?;
        Ok(GameResponse::new(game, &player1, &player2))
    }
}

/// Held for the duration of one command on a game. The shared entry in the
/// lock table is removed when the last holder lets go.
struct GameLock<'a> {
    locks: &'a StdMutex<HashMap<String, Arc<Mutex<()>>>>,
    game_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for GameLock<'_> {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        self.guard.take();
        if locks
            .get(&self.game_id)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(&self.game_id);
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn lookup<'a>(
    players: &'a HashMap<String, Player>,
    player_id: &str,
) -> Result<&'a Player, GameServiceError> {
    players.get(player_id).ok_or_else(|| {
        GameServiceError::RepositoryError(format!("Player {} referenced but missing", player_id))
    })
}
