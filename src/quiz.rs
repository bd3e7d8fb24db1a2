use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Select};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use doomsday_calendar::Weekday;
use doomsday_engine::{evaluate, random_date, YearRange};
use doomsday_session::{format_duration, QuizSession};

use crate::cli::QuizArgs;
use crate::config;

/// Run the interactive quiz loop.
pub fn run(args: QuizArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    let start = args.start_year.unwrap_or(config.quiz.start_year);
    let end = args.end_year.unwrap_or(config.quiz.end_year);
    let range = YearRange::new(start, end).context("invalid year range")?;

    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut session = QuizSession::new();
    println!(
        "Doomsday quiz: dates from {} to {}. Guess the day of the week!",
        range.start(),
        range.end()
    );

    let day_names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();

    loop {
        let date = random_date(range, &mut rng);
        info!(%date, "question generated");

        println!();
        println!("What day of the week is {}?", date.to_string().bold());

        let started = Instant::now();
        let pick = Select::new()
            .with_prompt("Your answer")
            .items(&day_names)
            .default(0)
            .interact()
            .context("answer prompt failed")?;
        let elapsed = started.elapsed();
        let guess = Weekday::ALL[pick];

        let evaluation = evaluate(date);
        let Some(answer) = evaluation.weekday() else {
            println!(
                "{}",
                "Could not determine the weekday for this date; question skipped.".yellow()
            );
            continue;
        };

        let correct = guess == answer;
        session.record_answer(correct, elapsed);
        let time = format_duration(elapsed);

        if correct {
            println!("{}", format!("{guess} is correct! ({time})").green());
            let show = Confirm::new()
                .with_prompt("Show explanation?")
                .default(false)
                .interact()
                .context("explanation prompt failed")?;
            if show {
                println!();
                println!("{}", evaluation.explanation());
            }
        } else {
            println!(
                "{}",
                format!("{guess} is incorrect. The answer was {answer}. ({time})").red()
            );
            println!();
            println!("{}", evaluation.explanation());
        }

        if !round_menu(&mut session)? {
            print_stats(&session);
            return Ok(());
        }
    }
}

/// Post-answer menu. Returns `false` when the player quits.
fn round_menu(session: &mut QuizSession) -> Result<bool> {
    const ITEMS: &[&str] = &[
        "Next date",
        "Discard last answer",
        "Show statistics",
        "Reset statistics",
        "Quit",
    ];
    loop {
        let choice = Select::new()
            .with_prompt("Next")
            .items(ITEMS)
            .default(0)
            .interact()
            .context("menu prompt failed")?;
        match choice {
            0 => return Ok(true),
            1 => {
                if session.discard_last() {
                    println!("{}", "Question discarded from statistics.".yellow());
                } else {
                    println!("Nothing to discard.");
                }
            }
            2 => print_stats(session),
            3 => {
                session.reset();
                println!("Statistics reset.");
            }
            _ => return Ok(false),
        }
    }
}

fn print_stats(session: &QuizSession) {
    let stats = session.stats();
    println!();
    println!("Session statistics");
    println!("  Questions: {}", stats.total);
    println!("  Correct:   {}", stats.correct);
    println!("  Accuracy:  {:.1}%", stats.accuracy);
    println!("  Streak:    {}", stats.current_streak);
    match stats.timing {
        Some(timing) => {
            println!("  Fastest:   {}", format_duration(timing.fastest));
            println!("  Slowest:   {}", format_duration(timing.slowest));
            println!("  Average:   {}", format_duration(timing.average));
        }
        None => {
            println!("  Fastest:   -");
            println!("  Slowest:   -");
            println!("  Average:   -");
        }
    }
}
