mod cli;
mod config;
mod explain_cmd;
mod hints;
mod logging;
mod quiz;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Quiz(args) => quiz::run(args),
        Command::Explain(args) => explain_cmd::run(args),
        Command::Hints => hints::run(),
    }
}
