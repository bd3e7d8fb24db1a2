use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Doomsday trainer: drill the day-of-week mental-math algorithm.
#[derive(Parser)]
#[command(
    name = "doomsday",
    version,
    about = "Interactive trainer for the Doomsday day-of-week algorithm"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive quiz.
    Quiz(QuizArgs),
    /// Print the worked Doomsday explanation for one date.
    Explain(ExplainArgs),
    /// Print the month-adjustment and memorized-year hint tables.
    Hints,
}

/// Arguments for the `quiz` subcommand.
#[derive(clap::Args)]
pub struct QuizArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "doomsday.toml")]
    pub config: PathBuf,

    /// Override the first year dates are drawn from.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Override the last year dates are drawn from.
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Override the RNG seed from config (useful for reproducible drills).
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `explain` subcommand.
#[derive(clap::Args)]
pub struct ExplainArgs {
    /// Date to explain, formatted YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,
}
