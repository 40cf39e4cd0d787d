//! Random number generator verification command.
//!
//! The `rng` command prints the first few raw states of the seeded stream
//! that drives the deck shuffle. Two clients that disagree about a shuffle
//! can compare these values directly to find out where they diverge.

use crate::error::CliError;
use pokerduel_engine::rng::Lcg;
use std::io::Write;

/// Handle the rng command - print the opening of the shuffle stream.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = Lcg::new(s);
    let vals: Vec<u64> = (0..5).map(|_| rng.next_state()).collect();
    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "RNG sample: {:?}", vals)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_with_seed_prints_known_states() {
        let mut out = Vec::new();
        handle_rng_command(Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains(
            "RNG sample: [1250496027, 1116302264, 1000676753, 1668674806, 908095735]"
        ));
    }

    #[test]
    fn rng_is_deterministic_per_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_rng_command(Some(7), &mut out1).unwrap();
        handle_rng_command(Some(7), &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn rng_without_seed_succeeds() {
        let mut out = Vec::new();
        assert!(handle_rng_command(None, &mut out).is_ok());
        assert!(String::from_utf8(out).unwrap().contains("RNG sample"));
    }
}
