// server/src/main.rs

// Entry point for the patient records console. Argument parsing and dispatch
// live in the cli module.

use anyhow::Result;
use medrecords_server::cli::start_cli;

fn main() -> Result<()> {
    env_logger::init();
    start_cli()
}
