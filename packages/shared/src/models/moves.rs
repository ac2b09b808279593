use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A player's choice for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// Result of comparing the first move of a pair against the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError(pub String);

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid movement '{}'. Must be ROCK, PAPER or SCISSORS",
            self.0
        )
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROCK" => Ok(Move::Rock),
            "PAPER" => Ok(Move::Paper),
            "SCISSORS" => Ok(Move::Scissors),
            other => Err(ParseMoveError(other.to_string())),
        }
    }
}

/// Compares two moves. Total over every pair; equal moves tie.
pub fn evaluate(first: Move, second: Move) -> Outcome {
    if first == second {
        Outcome::Tie
    } else if first.beats() == second {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn any_move() -> impl Strategy<Value = Move> {
        prop::sample::select(Move::ALL.to_vec())
    }

    #[test_case(Move::Paper, Move::Rock, Outcome::FirstWins ; "paper covers rock")]
    #[test_case(Move::Rock, Move::Scissors, Outcome::FirstWins ; "rock crushes scissors")]
    #[test_case(Move::Scissors, Move::Paper, Outcome::FirstWins ; "scissors cut paper")]
    #[test_case(Move::Rock, Move::Paper, Outcome::SecondWins ; "rock loses to paper")]
    #[test_case(Move::Scissors, Move::Rock, Outcome::SecondWins ; "scissors lose to rock")]
    #[test_case(Move::Paper, Move::Scissors, Outcome::SecondWins ; "paper loses to scissors")]
    #[test_case(Move::Rock, Move::Rock, Outcome::Tie ; "rock ties")]
    #[test_case(Move::Paper, Move::Paper, Outcome::Tie ; "paper ties")]
    #[test_case(Move::Scissors, Move::Scissors, Outcome::Tie ; "scissors tie")]
    fn test_evaluate_table(first: Move, second: Move, expected: Outcome) {
        assert_eq!(evaluate(first, second), expected);
    }

    #[test]
    fn test_dominance_is_a_three_cycle() {
        assert_eq!(Move::Rock.beats(), Move::Scissors);
        assert_eq!(Move::Rock.beats().beats(), Move::Paper);
        assert_eq!(Move::Rock.beats().beats().beats(), Move::Rock);
    }

    #[test]
    fn test_parse_accepts_only_upper_case_names() {
        assert_eq!("ROCK".parse::<Move>(), Ok(Move::Rock));
        assert_eq!("PAPER".parse::<Move>(), Ok(Move::Paper));
        assert_eq!("SCISSORS".parse::<Move>(), Ok(Move::Scissors));
        assert!("rock".parse::<Move>().is_err());
        assert!("LIZARD".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_parse_error_names_the_rejected_value() {
        let err = "SPOCK".parse::<Move>().unwrap_err();
        assert!(err.to_string().contains("SPOCK"));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"SCISSORS\"");
        let parsed: Move = serde_json::from_str("\"PAPER\"").unwrap();
        assert_eq!(parsed, Move::Paper);
        assert!(serde_json::from_str::<Move>("\"LIZARD\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_anti_symmetric(a in any_move(), b in any_move()) {
            let forward = evaluate(a, b);
            let backward = evaluate(b, a);
            match forward {
                Outcome::Tie => prop_assert_eq!(backward, Outcome::Tie),
                Outcome::FirstWins => prop_assert_eq!(backward, Outcome::SecondWins),
                Outcome::SecondWins => prop_assert_eq!(backward, Outcome::FirstWins),
            }
        }

        #[test]
        fn prop_tie_iff_equal(a in any_move(), b in any_move()) {
            prop_assert_eq!(evaluate(a, b) == Outcome::Tie, a == b);
        }
    }
}
