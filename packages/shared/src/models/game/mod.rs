pub mod requests;
pub mod responses;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::round::Round;

/// Round wins needed to take the match.
pub const WINNING_SCORE: u32 = 3;

/// Which side of a game a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Player1,
    Player2,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Player1 => write!(f, "player 1"),
            Seat::Player2 => write!(f, "player 2"),
        }
    }
}

/// A match between two fixed players. Rounds are owned and stored inline,
/// in play order; the last one is the current round.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Game {
    pub id: String,
    pub player1_id: String,
    pub player2_id: String,
    pub player1_score: u32,
    pub player2_score: u32,
    pub winner: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub rounds: Vec<Round>,
    /// Bumped on every persisted mutation; writes are conditional on it.
    #[serde(default)]
    pub version: u64,
}

impl Game {
    pub fn new(player1_id: &str, player2_id: &str) -> Self {
        Game {
            id: Uuid::new_v4().to_string(),
            player1_id: player1_id.to_string(),
            player2_id: player2_id.to_string(),
            player1_score: 0,
            player2_score: 0,
            winner: None,
            is_active: true,
            created_at: Utc::now(),
            rounds: vec![],
            version: 0,
        }
    }

    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        if player_id == self.player1_id {
            Some(Seat::Player1)
        } else if player_id == self.player2_id {
            Some(Seat::Player2)
        } else {
            None
        }
    }

    pub fn player_id(&self, seat: Seat) -> &str {
        match seat {
            Seat::Player1 => &self.player1_id,
            Seat::Player2 => &self.player2_id,
        }
    }

    pub fn score(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Player1 => self.player1_score,
            Seat::Player2 => self.player2_score,
        }
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn involves(&self, player_id: &str) -> bool {
        self.seat_of(player_id).is_some()
    }

    pub fn decisive_rounds(&self) -> usize {
        self.rounds.iter().filter(|r| r.winner.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = Game::new("p1", "p2");

        assert_eq!(game.player1_id, "p1");
        assert_eq!(game.player2_id, "p2");
        assert_eq!(game.player1_score, 0);
        assert_eq!(game.player2_score, 0);
        assert!(game.is_active);
        assert!(game.winner.is_none());
        assert!(game.rounds.is_empty());
        assert!(game.current_round().is_none());
        assert_eq!(game.version, 0);
    }

    #[test]
    fn test_game_id_uniqueness() {
        let first = Game::new("p1", "p2");
        let second = Game::new("p1", "p2");

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_seat_resolution() {
        let game = Game::new("p1", "p2");

        assert_eq!(game.seat_of("p1"), Some(Seat::Player1));
        assert_eq!(game.seat_of("p2"), Some(Seat::Player2));
        assert_eq!(game.seat_of("p3"), None);
        assert_eq!(game.player_id(Seat::Player2), "p2");
        assert!(game.involves("p1"));
        assert!(!game.involves(""));
    }

    #[test]
    fn test_version_defaults_when_missing() {
        let game = Game::new("p1", "p2");
        let mut value = serde_json::to_value(&game).unwrap();
        value.as_object_mut().unwrap().remove("version");

        let restored: Game = serde_json::from_value(value).unwrap();

        assert_eq!(restored.version, 0);
        assert_eq!(restored.id, game.id);
    }
}
