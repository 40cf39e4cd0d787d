//! Command handler modules for the pokerduel CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters, never captured
//! - Errors propagated via the `CliError` enum

pub mod deal;
pub mod eval;
pub mod play;
pub mod replay;
pub mod rng;
pub mod sim;

pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
