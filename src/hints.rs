use anyhow::Result;

use doomsday_calendar::month_name;
use doomsday_engine::{known_year_anchor, month_adjustment};

/// Print the hint tables the quiz's dropdowns expose: month adjustments and
/// the memorized doomsdays for 2003-2010.
pub fn run() -> Result<()> {
    println!("Month adjustments (leap years: subtract 1 in January/February):");
    for month in 1..=12u8 {
        println!("  {:<10} {}", month_name(month), month_adjustment(month));
    }

    println!();
    println!("Memorized doomsdays:");
    for year in 2003..=2010 {
        let anchor = known_year_anchor(year).expect("2003..=2010 are memorized years");
        println!("  {year}  {} ({})", anchor, anchor.offset());
    }
    Ok(())
}
