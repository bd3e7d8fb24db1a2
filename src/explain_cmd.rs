use anyhow::{anyhow, Context, Result};

use doomsday_calendar::Date;
use doomsday_engine::evaluate;

use crate::cli::ExplainArgs;

/// Print the worked Doomsday explanation for one date.
pub fn run(args: ExplainArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let evaluation = evaluate(date);

    println!("{date}");
    match evaluation.weekday() {
        Some(day) => println!("Answer: {day}"),
        None => println!("Answer: unknown (calendar resolution failed)"),
    }
    println!();
    println!("{}", evaluation.explanation());
    Ok(())
}

/// Parses a `YYYY-MM-DD` string into a validated [`Date`].
fn parse_date(text: &str) -> Result<Date> {
    let parts: Vec<&str> = text.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(anyhow!("expected YYYY-MM-DD, got {text:?}"));
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {text:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month in {text:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day in {text:?}"))?;
    Date::new(year, month, day).with_context(|| format!("invalid date {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let date = parse_date("1776-07-04").unwrap();
        assert_eq!(date.year(), 1776);
        assert_eq!(date.month(), 7);
        assert_eq!(date.day(), 4);
    }

    #[test]
    fn parse_unpadded() {
        let date = parse_date("2024-1-1").unwrap();
        assert_eq!(date.month(), 1);
    }

    #[test]
    fn parse_wrong_shape() {
        assert!(parse_date("1776/07/04").is_err());
        assert!(parse_date("1776-07").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parse_invalid_calendar_date() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-04-31").is_err());
    }

    #[test]
    fn parse_non_numeric() {
        assert!(parse_date("yyyy-mm-dd").is_err());
    }
}
