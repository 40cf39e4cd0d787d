//! # Pokerduel CLI Library
//!
//! Command-line interface for the pokerduel engine. It exposes subcommands
//! for dealing, evaluating hands, playing hot-seat matches, batch
//! simulation, and replay auditing of recorded match logs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerduel", "deal", "--seed", "42"];
//! let code = pokerduel_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Show the opening position for a seed
//! - `eval`: Evaluate a five-card hand
//! - `play`: Play an interactive hot-seat match
//! - `sim`: Run self-play matches, optionally recording JSONL
//! - `replay`: Re-derive and verify recorded matches
//! - `rng`: Inspect the seeded shuffle stream

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod ui;

use cli::{Commands, PokerduelCli};
use commands::{
    handle_deal_command, handle_eval_command, handle_play_command, handle_replay_command,
    handle_rng_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pokerduel", "deal", "--seed", "42"];
/// let code = pokerduel_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "play", "sim", "replay", "rng"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = PokerduelCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: pokerduel <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: pokerduel --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Deal { seed } => match handle_deal_command(seed, out) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Eval { cards } => match handle_eval_command(&cards, out) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Play { seed } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(seed, out, err, &mut stdin_lock) {
                    Ok(()) => 0,
                    Err(e) => {
                        if writeln!(err, "Error: {}", e).is_err() {
                            return 2;
                        }
                        2
                    }
                }
            }
            Commands::Sim {
                matches,
                seed,
                output,
            } => match handle_sim_command(matches, seed, output, out, err) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Replay { input } => match handle_replay_command(input, out, err) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
            Commands::Rng { seed } => match handle_rng_command(seed, out) {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            },
        },
    }
}
