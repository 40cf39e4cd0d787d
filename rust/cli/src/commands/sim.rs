//! Simulation command handler for batch self-play.
//!
//! Runs complete matches with a first-legal-column policy (each player
//! always places into the leftmost legal column) and optionally records one
//! `MatchRecord` per line to a JSONL file. Match `i` uses `base_seed + i`,
//! so a recorded batch can be regenerated from its first seed alone.

use crate::error::CliError;
use crate::formatters::format_result;
use crate::ui;
use pokerduel_engine::board::TOTAL_MOVES;
use pokerduel_engine::game::GameState;
use pokerduel_engine::logger::{MatchLogger, MatchRecord};
use pokerduel_engine::rules::legal_columns;
use pokerduel_engine::score::MatchResult;
use std::io::Write;

/// Handle the sim command: run self-play matches.
///
/// # Arguments
///
/// * `matches` - Number of matches to simulate (must be >= 1)
/// * `seed` - Base seed; match i uses seed + i (default: random)
/// * `output` - Optional JSONL path for match records
/// * `out` - Output stream for per-match results
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    matches: u64,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if matches == 0 {
        ui::write_error(err, "matches must be >= 1")?;
        return Err(CliError::InvalidInput("matches must be >= 1".to_string()));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    let mut logger = match output {
        Some(path) => Some(MatchLogger::create(path)?),
        None => None,
    };

    for i in 0..matches {
        let match_seed = base_seed.wrapping_add(i);
        let (state, result) = run_first_legal_match(match_seed)?;

        writeln!(
            out,
            "Match {}: seed={} {}",
            i + 1,
            match_seed,
            format_result(&result)
        )?;

        if let Some(logger) = logger.as_mut() {
            let record = MatchRecord {
                match_id: logger.next_id(),
                seed: match_seed,
                moves: state.moves().to_vec(),
                result: Some(format_result(&result)),
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "Simulated {} match(es)", matches)?;
    Ok(())
}

/// Plays one full match where each turn goes to the leftmost legal column.
fn run_first_legal_match(seed: u64) -> Result<(GameState, MatchResult), CliError> {
    let mut state = GameState::new_match(seed)?;
    for _ in 0..TOTAL_MOVES {
        let seat = state.next_player();
        let column = legal_columns(state.board(), seat)
            .into_iter()
            .next()
            .ok_or_else(|| CliError::Engine("no legal column mid-match".to_string()))?;
        let (next, _) = state.apply_move(seat, column)?;
        state = next;
    }
    state.finish();
    let result = state.score()?;
    Ok((state, result))
}
