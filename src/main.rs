//! lsq CLI: list directory entries; use -r for level-order recursion.

use anyhow::Result;
use clap::Parser;
use lsq::engine::arg_parser::Cli;
use lsq::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
