//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_lines_carry_the_prefix() {
        let mut buf = Vec::new();
        write_error(&mut buf, "no such match").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error: no such match\n");
    }

    #[test]
    fn warnings_carry_the_prefix() {
        let mut buf = Vec::new();
        display_warning(&mut buf, "log truncated").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "WARNING: log truncated\n");
    }
}
