//! Move log replay and the turn state machine.
//!
//! The move log is the single source of truth for a match: every party
//! (either player, or a later auditor) derives the complete board from
//! nothing but the shared seed and the ordered log. Moves carry no card
//! payload; the card is implicit from deterministic draw order.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Seat, COLUMN_COUNT, TOTAL_MOVES};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::rules::can_place_on_column;
use crate::score::{score, MatchResult};

/// One placement event: "the card currently drawn for `player` goes into
/// `column`". Serialized as `{"player": 1, "column": 0}` in descriptors
/// and match records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub player: Seat,
    pub column: u8,
}

/// Match lifecycle: dealing, placing, revealing, finished. [`replay`]
/// holds `Dealing` while the starters go out and always returns `Placing`
/// or later; `Revealing` carries no further data transitions — scoring
/// reads the final board, and the host flips to `Finished` when
/// presentation is done.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    Placing,
    Revealing,
    Finished,
}

/// Full derived state of a match at some log prefix.
///
/// A `GameState` is a value: [`apply_move`](GameState::apply_move) returns a
/// new state and never mutates the input, so a host owns one current-state
/// binding and replaces it atomically after each engine call. Re-deriving
/// via [`replay`] with the same `(seed, log)` always produces the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    seed: u64,
    moves: Vec<Move>,
    board: Board,
    burned: Card,
    /// Undealt cards, next drawn card first.
    deck: Vec<Card>,
    phase: Phase,
}

/// Derives full game state from a seed and an ordered move log.
///
/// Pure: shuffle from the seed, burn one card, deal the ten starter cards
/// in the fixed interleaved order (player one column `i`, then player two
/// column `i`, for `i` in 0..5), then consume the log in order, each move
/// taking the next undealt card.
///
/// Replay applies the log structurally and does not re-check the
/// balanced-fill rule; legality is enforced when moves are appended, and
/// an auditor must be able to replay any log that was physically possible.
///
/// # Errors
///
/// Fails on structurally impossible logs only: a column index out of
/// range, a column pushed past five cards, or more moves than the deck
/// can cover.
pub fn replay(seed: u64, moves: &[Move]) -> Result<GameState, GameError> {
    let mut deck = Deck::new_with_seed(seed);
    let burned = deck.burn_card().ok_or(GameError::DeckExhausted)?;

    let mut state = GameState {
        seed,
        moves: Vec::with_capacity(moves.len()),
        board: Board::new(),
        burned,
        deck: Vec::new(),
        phase: Phase::Dealing,
    };
    for i in 0..COLUMN_COUNT {
        let c1 = deck.deal_card().ok_or(GameError::DeckExhausted)?;
        state.board.place(Seat::One, i, c1)?;
        let c2 = deck.deal_card().ok_or(GameError::DeckExhausted)?;
        state.board.place(Seat::Two, i, c2)?;
    }

    for mv in moves {
        let card = deck.deal_card().ok_or(GameError::DeckExhausted)?;
        state.board.place(mv.player, mv.column as usize, card)?;
        state.moves.push(*mv);
    }

    state.deck = deck.undealt().to_vec();
    state.phase = if state.moves.len() >= TOTAL_MOVES {
        Phase::Revealing
    } else {
        Phase::Placing
    };
    Ok(state)
}

impl GameState {
    /// Starts a fresh match: replay of the empty log.
    pub fn new_match(seed: u64) -> Result<Self, GameError> {
        replay(seed, &[])
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The card discarded before dealing. Never visible to either player,
    /// but required for conservation audits.
    pub fn burned_card(&self) -> Card {
        self.burned
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The undealt remainder of the deck, next card first.
    pub fn remaining_deck(&self) -> &[Card] {
        &self.deck
    }

    /// Whose turn it is: player one when the log length is even, player
    /// two when odd.
    pub fn next_player(&self) -> Seat {
        if self.moves.len() % 2 == 0 {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// The card the active player must place, or `None` once the match has
    /// left the placing phase.
    pub fn drawn_card(&self) -> Option<Card> {
        if self.phase == Phase::Placing {
            self.deck.first().copied()
        } else {
            None
        }
    }

    /// True if placing the drawn card into `column` is legal for `seat`
    /// right now: placing phase, that player's turn, and the column is one
    /// of the player's shortest non-full columns.
    pub fn is_legal_placement(&self, seat: Seat, column: usize) -> bool {
        self.phase == Phase::Placing
            && seat == self.next_player()
            && can_place_on_column(&self.board, seat, column)
    }

    /// Places the drawn card, returning the successor state and the move
    /// to append to the shared log. The input state is never mutated; on
    /// rejection the caller's state is exactly as before.
    ///
    /// # Errors
    ///
    /// [`GameError::MatchComplete`] outside the placing phase,
    /// [`GameError::NotPlayersTurn`] off-turn, and
    /// [`GameError::ColumnOutOfRange`] / [`GameError::IllegalPlacement`]
    /// for bad targets.
    pub fn apply_move(&self, seat: Seat, column: usize) -> Result<(GameState, Move), GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::MatchComplete);
        }
        if seat != self.next_player() {
            return Err(GameError::NotPlayersTurn {
                expected: self.next_player().number(),
                actual: seat.number(),
            });
        }
        if column >= COLUMN_COUNT {
            return Err(GameError::ColumnOutOfRange {
                column: column as u8,
            });
        }
        if !can_place_on_column(&self.board, seat, column) {
            return Err(GameError::IllegalPlacement {
                column: column as u8,
            });
        }

        let mut next = self.clone();
        let card = if next.deck.is_empty() {
            return Err(GameError::DeckExhausted);
        } else {
            next.deck.remove(0)
        };
        next.board.place(seat, column, card)?;
        let mv = Move {
            player: seat,
            column: column as u8,
        };
        next.moves.push(mv);
        if next.moves.len() >= TOTAL_MOVES {
            next.phase = Phase::Revealing;
        }
        Ok((next, mv))
    }

    /// Scores the completed board.
    ///
    /// # Errors
    ///
    /// [`GameError::BoardIncomplete`] before all forty moves are in.
    pub fn score(&self) -> Result<MatchResult, GameError> {
        score(&self.board)
    }

    /// Reveal-to-finished transition; a no-op in any other phase.
    pub fn finish(&mut self) {
        if self.phase == Phase::Revealing {
            self.phase = Phase::Finished;
        }
    }
}
