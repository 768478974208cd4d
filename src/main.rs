use anyhow::Result;
use clap::Parser;
use rusty_yardage::config::{Cli, load_config};
use rusty_yardage::{logging, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli)?;
    logging::init(&config.log_level);
    run::run(&config.mode)
}
