//! Play command handler: interactive hot-seat match.
//!
//! Both players share the same terminal and take turns typing a column
//! number (0-4). The drawn card is shown before each placement; illegal
//! columns are reported and the turn is retried. `quit` (or EOF) aborts
//! the match without scoring it.

use crate::error::CliError;
use crate::formatters::{format_board, format_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use pokerduel_engine::game::{GameState, Phase};
use pokerduel_engine::rules::legal_columns;
use std::io::{BufRead, Write};

/// Handle the play command: interactive hot-seat gameplay.
///
/// # Arguments
///
/// * `seed` - Match seed for reproducibility (default: random)
/// * `out` - Output stream for the board and prompts
/// * `err` - Error stream for rejected placements
/// * `stdin` - Input stream for column choices
pub fn handle_play_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    // A fresh match takes a timestamp seed, like every match the engine
    // creates; the explicit flag exists for reproducing past games.
    let seed = seed.unwrap_or_else(pokerduel_engine::rng::new_seed);
    let mut state = GameState::new_match(seed)?;

    writeln!(out, "play: seed={}", seed)?;
    writeln!(out, "Burned: {}", state.burned_card())?;

    while state.phase() == Phase::Placing {
        let seat = state.next_player();
        let Some(drawn) = state.drawn_card() else {
            break;
        };

        writeln!(out, "{}", format_board(state.board()))?;
        writeln!(
            out,
            "Player {} draws {} (columns {:?})",
            seat.number(),
            drawn,
            legal_columns(state.board(), seat)
        )?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out, "Aborted.")?;
            return Ok(());
        };
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }

        let Ok(column) = line.parse::<usize>() else {
            ui::write_error(err, "enter a column number 0-4, or quit")?;
            continue;
        };
        match state.apply_move(seat, column) {
            Ok((next, _)) => state = next,
            Err(e) => {
                ui::write_error(err, &e.to_string())?;
            }
        }
    }

    state.finish();
    writeln!(out, "{}", format_board(state.board()))?;
    let result = state.score()?;
    for (i, col) in result.columns.iter().enumerate() {
        writeln!(
            out,
            "Column {}: {} vs {} -> player {}",
            i,
            col.one.category.name(),
            col.two.category.name(),
            col.winner.number()
        )?;
    }
    writeln!(out, "Result: {}", format_result(&result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// 40 column choices that are always legal: each round sweeps the
    /// columns left to right, so every target is at the shared minimum.
    fn scripted_full_match() -> String {
        let mut script = String::new();
        for _round in 0..4 {
            for col in 0..5 {
                // both players pick the same column back to back
                script.push_str(&format!("{}\n{}\n", col, col));
            }
        }
        script
    }

    #[test]
    fn play_runs_a_scripted_match_to_the_result() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(scripted_full_match().into_bytes());

        handle_play_command(Some(42), &mut out, &mut err, &mut stdin).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("play: seed=42"));
        assert!(output.contains("Result: player 1 wins 3-2"));
        assert!(String::from_utf8(err).unwrap().is_empty());
    }

    #[test]
    fn play_quits_cleanly_on_request() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"0\nquit\n".to_vec());

        handle_play_command(Some(42), &mut out, &mut err, &mut stdin).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Aborted."));
    }

    #[test]
    fn play_treats_eof_as_abort() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(Vec::new());

        handle_play_command(Some(42), &mut out, &mut err, &mut stdin).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Aborted."));
    }

    #[test]
    fn play_reports_bad_input_and_retries_the_turn() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        // garbage, then an illegal column, then quit
        let mut stdin = Cursor::new(b"banana\n9\nquit\n".to_vec());

        handle_play_command(Some(42), &mut out, &mut err, &mut stdin).unwrap();
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("enter a column number"));
        assert!(errors.contains("out of range"));
    }
}
