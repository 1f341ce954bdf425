// src/bin/cli.rs
use color_eyre::eyre::Result;
use review_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run()?;
    Ok(())
}
