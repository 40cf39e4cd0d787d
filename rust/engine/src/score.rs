use serde::{Deserialize, Serialize};

use crate::board::{Board, Seat, COLUMN_COUNT};
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate_hand, Evaluation};
use std::cmp::Ordering;

/// Outcome of one column: both evaluations and the winning seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnResult {
    pub winner: Seat,
    pub one: Evaluation,
    pub two: Evaluation,
}

/// Final match outcome: per-column results and aggregate win counts.
/// Computed exactly once, after the fortieth move, and immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub columns: Vec<ColumnResult>,
    pub one_wins: u8,
    pub two_wins: u8,
    pub overall_winner: Seat,
}

/// Scores a completed board: evaluates both hands in each of the five
/// columns, compares them, and accumulates column wins.
///
/// Every column produces exactly one winner — when the tie-break keys are
/// equal at every position the first-given hand (player one's) wins by
/// convention — so with five columns the overall result can never tie.
///
/// # Errors
///
/// [`GameError::BoardIncomplete`] if any column holds fewer than five
/// cards.
pub fn score(board: &Board) -> Result<MatchResult, GameError> {
    if !board.is_complete() {
        return Err(GameError::BoardIncomplete);
    }

    let mut columns = Vec::with_capacity(COLUMN_COUNT);
    let mut one_wins = 0u8;
    let mut two_wins = 0u8;
    for i in 0..COLUMN_COUNT {
        let one = evaluate_hand(board.column(Seat::One, i))?;
        let two = evaluate_hand(board.column(Seat::Two, i))?;
        let winner = match compare_hands(&one, &two) {
            Ordering::Less => Seat::Two,
            // Equal falls to the first-given hand.
            Ordering::Greater | Ordering::Equal => Seat::One,
        };
        match winner {
            Seat::One => one_wins += 1,
            Seat::Two => two_wins += 1,
        }
        columns.push(ColumnResult { winner, one, two });
    }

    let overall_winner = if one_wins > two_wins {
        Seat::One
    } else {
        Seat::Two
    };
    Ok(MatchResult {
        columns,
        one_wins,
        two_wins,
        overall_winner,
    })
}
