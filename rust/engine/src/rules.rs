//! Placement legality: the balanced-fill rule.
//!
//! A column is a legal target if and only if its length equals the minimum
//! length among the player's own five columns and is strictly less than
//! five. This forces roughly even growth across columns and is the rule the
//! synchronized replay path relies on; a client that allowed any open
//! column would diverge from its peer.

use crate::board::{Board, Seat, COLUMN_COUNT, COLUMN_HEIGHT};

/// True if `index` is a legal placement target for the player right now.
/// Turn order and match phase are checked by the state machine, not here.
pub fn can_place_on_column(board: &Board, seat: Seat, index: usize) -> bool {
    if index >= COLUMN_COUNT {
        return false;
    }
    let len = board.column(seat, index).len();
    len == board.min_column_len(seat) && len < COLUMN_HEIGHT
}

/// All legal placement targets for the player, in column order.
pub fn legal_columns(board: &Board, seat: Seat) -> Vec<usize> {
    (0..COLUMN_COUNT)
        .filter(|&i| can_place_on_column(board, seat, i))
        .collect()
}
