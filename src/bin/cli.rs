// src/bin/cli.rs
use color_eyre::eyre::WrapErr;
use pop_forecast::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().wrap_err("population forecast failed")?;
    Ok(())
}
