//! x - a simple command-line utility.
//!
//! Echoes its command-line arguments back on a single line, or prints a
//! hint pointing at `-h` when invoked without any.
//!
//! ```
//! use x::cli::commands::render;
//!
//! let args = vec!["foo".to_string(), "bar".to_string()];
//! assert_eq!(render(&args), "Arguments: foo bar");
//! assert_eq!(render(&[]), "No arguments provided. Use -h for help.");
//! ```

pub mod cli;
pub mod constants;
