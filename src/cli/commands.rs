//! CLI command handlers.

use std::io::Write;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use super::args::Args;
use crate::constants;

/// Builds the line echoed for `args`, without a trailing newline.
#[must_use]
pub fn render(args: &[String]) -> String {
    if args.is_empty() {
        constants::MSG_NO_ARGUMENTS.to_string()
    } else {
        format!(
            "{}{}",
            constants::MSG_ARGUMENTS,
            args.join(constants::ARG_SEPARATOR)
        )
    }
}

/// Writes the echo line for the parsed arguments to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", render(&args.args)).wrap_err(constants::ERR_WRITE_OUTPUT)?;
    out.flush().wrap_err(constants::ERR_WRITE_OUTPUT)
}
