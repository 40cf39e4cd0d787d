//! Display formatting shared by the play, sim and replay commands.

use pokerduel_engine::board::{Board, Seat};
use pokerduel_engine::cards::Card;
use pokerduel_engine::score::MatchResult;

/// Space-separated compact card list, e.g. "9c 9s 7c".
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line match outcome, e.g. "player 1 wins 3-2".
pub fn format_result(result: &MatchResult) -> String {
    format!(
        "player {} wins {}-{}",
        result.overall_winner.number(),
        result.one_wins.max(result.two_wins),
        result.one_wins.min(result.two_wins)
    )
}

/// One board row per player, columns bracketed left to right.
pub fn format_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(2);
    for seat in [Seat::One, Seat::Two] {
        let cols: Vec<String> = board
            .columns(seat)
            .iter()
            .map(|col| format!("[{}]", format_cards(col)))
            .collect();
        lines.push(format!("P{}: {}", seat.number(), cols.join(" ")));
    }
    lines.join("\n")
}
