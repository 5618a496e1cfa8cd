// src/bin/cli.rs
use color_eyre::eyre::Result;

use id_pools::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    cli::run()?;
    Ok(())
}
