//! Replay command handler: audit a JSONL match log.
//!
//! Every record is re-derived from its `(seed, moves)` pair and re-scored;
//! a stored result that disagrees with the re-derived one marks the record
//! as corrupt. Unparseable lines are skipped with a warning so one bad line
//! does not hide the rest of the file.

use crate::error::CliError;
use crate::formatters::format_result;
use crate::ui;
use pokerduel_engine::game::replay;
use pokerduel_engine::logger::MatchRecord;
use std::io::Write;

/// Handle the replay command: verify a recorded match log.
///
/// Returns `Ok(())` only when every parseable record re-derives cleanly and
/// matches its stored result.
pub fn handle_replay_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(&input)?;

    let mut replayed = 0usize;
    let mut failures = 0usize;

    for (lineno, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: MatchRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                ui::display_warning(err, &format!("line {}: skipped ({})", lineno + 1, e))?;
                continue;
            }
        };

        replayed += 1;
        match verify_record(&record) {
            Ok(result_line) => {
                writeln!(out, "{}: {} [ok]", record.match_id, result_line)?;
            }
            Err(reason) => {
                failures += 1;
                ui::write_error(err, &format!("{}: {}", record.match_id, reason))?;
            }
        }
    }

    writeln!(out, "Replayed {} match(es), {} failure(s)", replayed, failures)?;
    if failures > 0 {
        return Err(CliError::InvalidInput(format!(
            "{} corrupt record(s) in {}",
            failures, input
        )));
    }
    Ok(())
}

/// Re-derives one record; returns the result line or a failure reason.
fn verify_record(record: &MatchRecord) -> Result<String, String> {
    let state = replay(record.seed, &record.moves).map_err(|e| e.to_string())?;
    if !state.board().is_complete() {
        return Ok(format!("incomplete after {} move(s)", record.moves.len()));
    }
    let result = state.score().map_err(|e| e.to_string())?;
    let derived = format_result(&result);
    if let Some(stored) = &record.result {
        if stored != &derived {
            return Err(format!(
                "stored result {:?} but log derives {:?}",
                stored, derived
            ));
        }
    }
    Ok(derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerduel_engine::board::Seat;
    use pokerduel_engine::game::Move;

    fn full_log() -> Vec<Move> {
        let mut moves = Vec::new();
        for _round in 0..4 {
            for col in 0..5u8 {
                moves.push(Move {
                    player: Seat::One,
                    column: col,
                });
                moves.push(Move {
                    player: Seat::Two,
                    column: col,
                });
            }
        }
        moves
    }

    fn record(seed: u64, result: Option<&str>) -> MatchRecord {
        MatchRecord {
            match_id: "20260101-000001".to_string(),
            seed,
            moves: full_log(),
            result: result.map(|s| s.to_string()),
            ts: None,
            meta: None,
        }
    }

    #[test]
    fn verify_accepts_a_consistent_record() {
        let derived = verify_record(&record(42, Some("player 1 wins 3-2"))).unwrap();
        assert_eq!(derived, "player 1 wins 3-2");
    }

    #[test]
    fn verify_rejects_a_tampered_result() {
        let reason = verify_record(&record(42, Some("player 2 wins 3-2"))).unwrap_err();
        assert!(reason.contains("stored result"));
    }

    #[test]
    fn verify_reports_incomplete_logs_without_failing() {
        let mut rec = record(42, None);
        rec.moves.truncate(10);
        let line = verify_record(&rec).unwrap();
        assert!(line.contains("incomplete after 10 move(s)"));
    }

    #[test]
    fn missing_input_file_maps_to_an_io_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_replay_command(
            "definitely-not-here.jsonl".to_string(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
