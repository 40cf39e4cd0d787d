//! Clap command definitions for the `pokerduel` binary.
//!
//! All subcommands are declared here so the dispatch in [`crate::run`] and
//! the handler modules under `commands/` stay free of argument-parsing
//! concerns.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the `pokerduel` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pokerduel",
    version,
    about = "Deterministic two-player duel poker"
)]
pub struct PokerduelCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the opening position for a seed: burn, starters, first draw
    Deal {
        /// Match seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate a five-card hand given in compact notation (e.g. Ah Kd 10s)
    Eval {
        /// Exactly five cards
        #[arg(num_args = 5, required = true)]
        cards: Vec<String>,
    },
    /// Play an interactive hot-seat match on stdin
    Play {
        /// Match seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run self-play matches and optionally record them as JSONL
    Sim {
        /// Number of matches to simulate
        #[arg(long, default_value_t = 1)]
        matches: u64,
        /// Base seed; match i uses seed + i (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Path for the JSONL match log
        #[arg(long)]
        output: Option<String>,
    },
    /// Re-derive every match in a JSONL log and verify the stored results
    Replay {
        /// Path to a JSONL match log
        #[arg(long)]
        input: String,
    },
    /// Print the first outputs of the deck-shuffle RNG for a seed
    Rng {
        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
