use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Number of columns per player.
pub const COLUMN_COUNT: usize = 5;
/// Cards per completed column.
pub const COLUMN_HEIGHT: usize = 5;
/// Placement moves in a full match: 5 columns x 2 players x 4 cards each,
/// after the 10 starter cards.
pub const TOTAL_MOVES: usize = 40;

/// One of the two players in a duel. Serialized as the integers 1 and 2,
/// matching the wire form of the shared match descriptor.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }
}

impl From<Seat> for u8 {
    fn from(s: Seat) -> u8 {
        s.number()
    }
}

impl TryFrom<u8> for Seat {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Seat::One),
            2 => Ok(Seat::Two),
            other => Err(format!("invalid player number: {}", other)),
        }
    }
}

/// The duel board: five append-only columns of up to five cards per player.
///
/// The board never removes or reorders cards; `place` is the only mutator
/// and enforces the structural cap. Legality beyond that (turn order,
/// balanced fill) belongs to the turn state machine, not the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: [[Vec<Card>; COLUMN_COUNT]; 2],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// All five columns for one player.
    pub fn columns(&self, seat: Seat) -> &[Vec<Card>; COLUMN_COUNT] {
        &self.columns[seat.index()]
    }

    /// A single column, in placement order.
    pub fn column(&self, seat: Seat, index: usize) -> &[Card] {
        &self.columns[seat.index()][index]
    }

    /// Appends a card to a column. Fails if the index is out of range or
    /// the column already holds five cards; the board is unchanged on error.
    pub fn place(&mut self, seat: Seat, index: usize, card: Card) -> Result<(), GameError> {
        if index >= COLUMN_COUNT {
            return Err(GameError::ColumnOutOfRange {
                column: index as u8,
            });
        }
        let col = &mut self.columns[seat.index()][index];
        if col.len() >= COLUMN_HEIGHT {
            return Err(GameError::ColumnFull {
                column: index as u8,
            });
        }
        col.push(card);
        Ok(())
    }

    /// Length of the player's shortest column.
    pub fn min_column_len(&self, seat: Seat) -> usize {
        self.columns[seat.index()]
            .iter()
            .map(|c| c.len())
            .min()
            .unwrap_or(0)
    }

    /// True once every column for both players holds five cards.
    pub fn is_complete(&self) -> bool {
        self.columns
            .iter()
            .flatten()
            .all(|c| c.len() == COLUMN_HEIGHT)
    }

    /// Total cards placed on the board, starters included.
    pub fn card_count(&self) -> usize {
        self.columns.iter().flatten().map(|c| c.len()).sum()
    }

    /// Iterates over every card on the board, both players.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.columns.iter().flatten().flatten().copied()
    }
}
