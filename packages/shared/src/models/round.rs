use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::game::Seat;
use crate::models::moves::{evaluate, Move, Outcome};

/// Where a round is in its lifecycle. Derived from which moves are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingPlayer1,
    AwaitingPlayer2,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    AlreadyComplete,
    OutOfTurn { expected: Seat },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::AlreadyComplete => write!(f, "This round is already complete"),
            RoundError::OutOfTurn { expected } => write!(f, "It is {}'s turn", expected),
        }
    }
}

impl std::error::Error for RoundError {}

/// One exchange of moves within a game.
///
/// Each move slot is written at most once. `winner` holds the winning
/// player's id and is only set once both moves are in and they differ.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Round {
    pub id: String,
    pub game_id: String,
    pub player1_move: Option<Move>,
    pub player2_move: Option<Move>,
    pub winner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Round {
    pub fn new(game_id: &str) -> Self {
        Round {
            id: Uuid::new_v4().to_string(),
            game_id: game_id.to_string(),
            player1_move: None,
            player2_move: None,
            winner: None,
            created_at: Utc::now(),
        }
    }

    pub fn state(&self) -> RoundState {
        match (self.player1_move, self.player2_move) {
            (None, _) => RoundState::AwaitingPlayer1,
            (Some(_), None) => RoundState::AwaitingPlayer2,
            (Some(_), Some(_)) => RoundState::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == RoundState::Complete
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match (self.player1_move, self.player2_move) {
            (Some(first), Some(second)) => Some(evaluate(first, second)),
            _ => None,
        }
    }

    /// Records `movement` for `seat`, enforcing player 1 then player 2.
    ///
    /// Returns the outcome when this move completes the round.
    pub fn submit(
        &mut self,
        seat: Seat,
        movement: Move,
        player1_id: &str,
        player2_id: &str,
    ) -> Result<Option<Outcome>, RoundError> {
        match (self.state(), seat) {
            (RoundState::Complete, _) => Err(RoundError::AlreadyComplete),
            (RoundState::AwaitingPlayer1, Seat::Player1) => {
                self.player1_move = Some(movement);
                Ok(None)
            }
            (RoundState::AwaitingPlayer2, Seat::Player2) => {
                self.player2_move = Some(movement);
                let outcome = self.outcome();
                self.winner = match outcome {
                    Some(Outcome::FirstWins) => Some(player1_id.to_string()),
                    Some(Outcome::SecondWins) => Some(player2_id.to_string()),
                    _ => None,
                };
                Ok(outcome)
            }
            (RoundState::AwaitingPlayer1, _) => Err(RoundError::OutOfTurn {
                expected: Seat::Player1,
            }),
            (RoundState::AwaitingPlayer2, _) => Err(RoundError::OutOfTurn {
                expected: Seat::Player2,
            }),
        }
    }
}
