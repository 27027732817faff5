//! Application-wide constants.
//!
//! Application metadata, user-facing messages, and process exit codes used
//! throughout x.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Short summary shown at the top of `--help` (from Cargo.toml).
pub const APP_SUMMARY: &str = env!("CARGO_PKG_DESCRIPTION");

// === Messages: CLI Output ===

/// Prefix printed before the echoed arguments.
pub const MSG_ARGUMENTS: &str = "Arguments: ";
/// Separator placed between echoed arguments.
pub const ARG_SEPARATOR: &str = " ";
/// Hint printed when the program is invoked without arguments.
pub const MSG_NO_ARGUMENTS: &str = "No arguments provided. Use -h for help.";

// === Error Messages ===

pub const ERR_WRITE_OUTPUT: &str = "Failed to write to standard output";
pub const ERR_WRITE_HELP: &str = "Failed to print help";

// === Exit Codes ===

/// Exit status when help is requested. Matches clap's usage-error code.
pub const EXIT_HELP: i32 = 2;
