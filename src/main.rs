use std::io;

use color_eyre::Result;
use x::cli::{args, commands};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = args::parse()?;
    commands::run(&args, &mut io::stdout().lock())
}
