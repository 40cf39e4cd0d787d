use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Hand must contain exactly 5 cards, got {actual}")]
    InvalidHandSize { actual: usize },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: u8, actual: u8 },
    #[error("Column {column} is not a legal placement target")]
    IllegalPlacement { column: u8 },
    #[error("Column index {column} out of range")]
    ColumnOutOfRange { column: u8 },
    #[error("Column {column} is already full")]
    ColumnFull { column: u8 },
    #[error("Match is already complete")]
    MatchComplete,
    #[error("Deck exhausted during replay")]
    DeckExhausted,
    #[error("Board is not complete yet")]
    BoardIncomplete,
    #[error("Stale write: observed log length {observed}, actual {actual}")]
    StaleWrite { observed: usize, actual: usize },
    #[error("No match found for room code {code}")]
    MatchNotFound { code: String },
    #[error("Match {code} already has two players")]
    MatchFull { code: String },
}
