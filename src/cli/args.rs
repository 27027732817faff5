//! Command-line argument definitions.

use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::constants;

/// X - A simple command-line utility
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, about, long_about = None)]
pub struct Args {
    /// Arguments to process
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

/// Parses the process arguments.
///
/// A help request prints usage to stdout and exits with
/// [`constants::EXIT_HELP`]; any other parse error is reported by clap,
/// which exits with its usage code.
///
/// # Errors
///
/// Returns an error if the help text cannot be written.
pub fn parse() -> Result<Args> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            err.print().wrap_err(constants::ERR_WRITE_HELP)?;
            process::exit(constants::EXIT_HELP);
        }
        Err(err) => err.exit(),
    }
}
