use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::game::Game;
use crate::models::moves::Move;
use crate::models::player::Player;
use crate::models::round::{Round, RoundState};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RoundResponse {
    pub id: String,
    pub player1_move: Option<Move>,
    pub player2_move: Option<Move>,
    pub winner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub result: String,
}

/// Game as rendered to clients, with player ids resolved to players.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GameResponse {
    pub id: String,
    pub player1: Player,
    pub player2: Player,
    pub player1_score: u32,
    pub player2_score: u32,
    pub winner: Option<Player>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub rounds: Vec<RoundResponse>,
    pub status: String,
}

impl GameResponse {
    pub fn new(game: &Game, player1: &Player, player2: &Player) -> Self {
        let winner = game
            .winner
            .as_deref()
            .and_then(|id| resolve(id, player1, player2))
            .cloned();

        let status = match (&winner, game.is_active) {
            (_, true) => "in progress".to_string(),
            (Some(winner), false) => format!("finished, winner: {}", winner.name),
            (None, false) => "finished, no winner".to_string(),
        };

        GameResponse {
            id: game.id.clone(),
            player1: player1.clone(),
            player2: player2.clone(),
            player1_score: game.player1_score,
            player2_score: game.player2_score,
            winner,
            is_active: game.is_active,
            created_at: game.created_at,
            rounds: game
                .rounds
                .iter()
                .map(|round| RoundResponse::new(round, player1, player2))
                .collect(),
            status,
        }
    }
}

impl RoundResponse {
    pub fn new(round: &Round, player1: &Player, player2: &Player) -> Self {
        let result = match (round.state(), round.winner.as_deref()) {
            (RoundState::Complete, None) => "tie".to_string(),
            (RoundState::Complete, Some(id)) => match resolve(id, player1, player2) {
                Some(player) => format!("winner: {}", player.name),
                None => format!("winner: {}", id),
            },
            _ => "in progress".to_string(),
        };

        RoundResponse {
            id: round.id.clone(),
            player1_move: round.player1_move,
            player2_move: round.player2_move,
            winner: round.winner.clone(),
            created_at: round.created_at,
            result,
        }
    }
}

fn resolve<'a>(id: &str, player1: &'a Player, player2: &'a Player) -> Option<&'a Player> {
    [player1, player2].into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::Seat;

    fn setup() -> (Game, Player, Player) {
        let alice = Player::new("Alice");
        let bob = Player::new("Bob");
        let game = Game::new(&alice.id, &bob.id);
        (game, alice, bob)
    }

    #[test]
    fn test_active_game_status() {
        let (game, alice, bob) = setup();

        let response = GameResponse::new(&game, &alice, &bob);

        assert_eq!(response.status, "in progress");
        assert_eq!(response.player1.name, "Alice");
        assert_eq!(response.player2.name, "Bob");
        assert!(response.winner.is_none());
        assert!(response.rounds.is_empty());
    }

    #[test]
    fn test_finished_game_status_names_winner() {
        let (mut game, alice, bob) = setup();
        game.player2_score = 3;
        game.winner = Some(bob.id.clone());
        game.is_active = false;

        let response = GameResponse::new(&game, &alice, &bob);

        assert_eq!(response.status, "finished, winner: Bob");
        assert_eq!(response.winner, Some(bob));
    }

    #[test]
    fn test_deactivated_game_without_winner() {
        let (mut game, alice, bob) = setup();
        game.is_active = false;

        let response = GameResponse::new(&game, &alice, &bob);

        assert_eq!(response.status, "finished, no winner");
    }

    #[test]
    fn test_round_results() {
        let (game, alice, bob) = setup();
        let mut open = Round::new(&game.id);
        open.submit(Seat::Player1, Move::Rock, &alice.id, &bob.id)
            .unwrap();
        let mut tie = open.clone();
        tie.submit(Seat::Player2, Move::Rock, &alice.id, &bob.id)
            .unwrap();
        let mut won = open.clone();
        won.submit(Seat::Player2, Move::Paper, &alice.id, &bob.id)
            .unwrap();

        assert_eq!(RoundResponse::new(&open, &alice, &bob).result, "in progress");
        assert_eq!(RoundResponse::new(&tie, &alice, &bob).result, "tie");
        let won_response = RoundResponse::new(&won, &alice, &bob);
        assert_eq!(won_response.result, "winner: Bob");
        assert_eq!(won_response.winner, Some(bob.id.clone()));
    }

    #[test]
    fn test_response_serialization_shape() {
        let (game, alice, bob) = setup();
        let value = serde_json::to_value(GameResponse::new(&game, &alice, &bob)).unwrap();

        for field in [
            "id",
            "player1",
            "player2",
            "player1_score",
            "player2_score",
            "winner",
            "is_active",
            "created_at",
            "rounds",
            "status",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert!(value.get("version").is_none());
        assert!(value["winner"].is_null());
    }
}
