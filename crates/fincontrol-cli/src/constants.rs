//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure, including storage write errors.
    pub const FAILURE: i32 = 1;

    /// Resource not found (an explicitly requested config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}
