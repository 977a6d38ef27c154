//! Error types for the scorecard TUI.

use std::io;

use thiserror::Error;

/// Failures surfaced by the TUI's one fallible boundary, the terminal.
#[derive(Debug, Error)]
pub enum TuiError {
    /// The terminal could not be put into, or restored from, raw mode.
    #[error("terminal setup failed: {0}")]
    Setup(#[source] io::Error),

    /// Drawing or input polling failed mid-loop.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_error_displays_the_cause() {
        let cause = io::Error::new(io::ErrorKind::Other, "no tty");
        let error = TuiError::Setup(cause);
        assert!(error.to_string().contains("terminal setup failed"));
        assert!(error.to_string().contains("no tty"));
    }

    #[test]
    fn io_error_converts_via_from() {
        let cause = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        let error: TuiError = cause.into();
        assert!(matches!(error, TuiError::Io(_)));
    }
}
