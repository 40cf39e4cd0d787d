//! Deal command handler: show the opening position for a seed.
//!
//! Prints the burned card, both players' starter columns and the first
//! drawn card. With an explicit seed the output is fully deterministic,
//! which makes this the quickest way to inspect a disputed match setup.

use crate::error::CliError;
use crate::formatters::format_cards;
use pokerduel_engine::board::Seat;
use pokerduel_engine::cards::Card;
use pokerduel_engine::game::GameState;
use std::io::Write;

/// Handle the deal command.
///
/// Derives the opening position (burn, ten starters, first draw) for the
/// given seed, or a random one when omitted.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let state = GameState::new_match(seed)?;

    let starters = |seat: Seat| -> Vec<Card> {
        (0..5).map(|i| state.board().column(seat, i)[0]).collect()
    };

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Burned: {}", state.burned_card())?;
    writeln!(out, "P1 starters: {}", format_cards(&starters(Seat::One)))?;
    writeln!(out, "P2 starters: {}", format_cards(&starters(Seat::Two)))?;
    match state.drawn_card() {
        Some(card) => writeln!(out, "First draw: {}", card)?,
        None => writeln!(out, "First draw: -")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_with_seed_is_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), &mut out1).unwrap();
        handle_deal_command(Some(12345), &mut out2).unwrap();
        assert_eq!(out1, out2, "same seed should produce identical output");
    }

    #[test]
    fn deal_prints_the_known_position_for_seed_42() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Burned: 2d"));
        assert!(output.contains("P1 starters: 9c 7h 5s 4s 4h"));
        assert!(output.contains("P2 starters: 10h 3c 6d 6s 5d"));
        assert!(output.contains("First draw: 9s"));
    }

    #[test]
    fn deal_without_seed_still_reports_a_full_position() {
        let mut out = Vec::new();
        handle_deal_command(None, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed:"));
        assert!(output.contains("Burned:"));
        assert!(output.contains("First draw:"));
    }
}
