//! Error types for the CLI application.
//!
//! The CLI keeps a single hand-rolled enum rather than deriving one per
//! command; every handler returns `Result<(), CliError>` and the dispatch in
//! `lib.rs` maps any error to exit code 2.

use std::fmt;

use pokerduel_engine::errors::GameError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_error_class() {
        let e = CliError::InvalidInput("bad card".to_string());
        assert_eq!(e.to_string(), "Invalid input: bad card");

        let e: CliError = GameError::MatchComplete.into();
        assert!(e.to_string().starts_with("Engine error:"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("disk on fire").into();
        assert!(e.source().is_some());
    }
}
