use tracing::info;

use crate::{
    models::{
        game::{Game, Seat, WINNING_SCORE},
        moves::{Move, Outcome},
        round::Round,
    },
    services::errors::referee_service_errors::RefereeServiceError,
};

/// Applies the match rules to a game held in memory. Persistence is the
/// caller's job; a rejected move leaves the game untouched.
#[derive(Clone, Default)]
pub struct RefereeService;

impl RefereeService {
    pub fn new() -> Self {
        RefereeService
    }

    /// Validates and applies one move, returning the round outcome when the
    /// move completed a round.
    pub fn make_move(
        &self,
        game: &mut Game,
        player_id: Option<&str>,
        movement: Option<&str>,
    ) -> Result<Option<Outcome>, RefereeServiceError> {
        if !game.is_active {
            return Err(RefereeServiceError::GameFinished);
        }

        let movement = movement
            .ok_or_else(|| RefereeServiceError::InvalidMove("movement is required".to_string()))?
            .parse::<Move>()
            .map_err(|e| RefereeServiceError::InvalidMove(e.to_string()))?;

        let player_id = match player_id.map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(RefereeServiceError::MissingPlayer(
                    "player_id is required".to_string(),
                ))
            }
        };
        let seat = game.seat_of(player_id).ok_or_else(|| {
            RefereeServiceError::MissingPlayer(format!(
                "player {} is not part of game {}",
                player_id, game.id
            ))
        })?;

        // Only an unfinished last round is reused; anything else opens a new one.
        let (mut round, fresh) = match game.current_round() {
            Some(round) if !round.is_complete() => (round.clone(), false),
            _ => (Round::new(&game.id), true),
        };

        let outcome = round.submit(seat, movement, &game.player1_id, &game.player2_id)?;

        if fresh {
            info!("New round {} opened in game {}", round.id, game.id);
            game.rounds.push(round);
        } else if let Some(last) = game.rounds.last_mut() {
            *last = round;
        }

        let round_winner = match outcome {
            Some(Outcome::FirstWins) => Some(Seat::Player1),
            Some(Outcome::SecondWins) => Some(Seat::Player2),
            _ => None,
        };

        if let Some(seat) = round_winner {
            match seat {
                Seat::Player1 => game.player1_score += 1,
                Seat::Player2 => game.player2_score += 1,
            }
            if game.score(seat) >= WINNING_SCORE {
                game.winner = Some(game.player_id(seat).to_string());
                game.is_active = false;
                info!(
                    "Game {} finished {}-{}, winner {}",
                    game.id,
                    game.player1_score,
                    game.player2_score,
                    game.player_id(seat)
                );
            }
        }

        Ok(outcome)
    }

    /// Retires `game` if it is still running and returns its successor: same
    /// players, fresh scores, one empty round ready for player 1.
    pub fn restart(&self, game: &mut Game) -> Game {
        if game.is_active {
            game.is_active = false;
        }

        let mut next = Game::new(&game.player1_id, &game.player2_id);
        next.rounds.push(Round::new(&next.id));
        info!("Game {} restarted as {}", game.id, next.id);
        next
    }
}
