//! The odd+11 reduction of a year to its within-century doomsday offset.

use doomsday_calendar::mod7;

/// Result of the odd+11 method, with one trace line per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCode {
    value: u8,
    trace: Vec<String>,
}

impl YearCode {
    /// The reduced offset in 0..=6. Subtracted from the century anchor in
    /// the general Doomsday formula.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The five reasoning steps, in the order they were applied.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}

/// Reduces a year with the odd+11 method.
///
/// The five steps run in this exact order (reordering or reparenthesizing
/// changes the result for some years):
/// 1. take the last two digits;
/// 2. add 11 if odd;
/// 3. halve, rounding down;
/// 4. add 11 if odd;
/// 5. reduce mod 7.
pub fn year_code(year: i32) -> YearCode {
    let mut w = year.rem_euclid(100);
    let mut trace = vec![format!("Take last 2 digits: {w}")];

    if w % 2 == 1 {
        w += 11;
        trace.push(format!("Odd, so add 11: {w}"));
    } else {
        trace.push(format!("Even, so no change: {w}"));
    }

    w /= 2;
    trace.push(format!("Divide by 2: {w}"));

    if w % 2 == 1 {
        w += 11;
        trace.push(format!("Odd, so add 11: {w}"));
    } else {
        trace.push(format!("Even, so no change: {w}"));
    }

    let value = mod7(w as i64);
    trace.push(format!("Mod 7: {value}"));

    YearCode { value, trace }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_even_year() {
        // 76 -> 38 -> 38 mod 7 = 3
        let code = year_code(1776);
        assert_eq!(code.value(), 3);
        assert_eq!(
            code.trace(),
            &[
                "Take last 2 digits: 76",
                "Even, so no change: 76",
                "Divide by 2: 38",
                "Even, so no change: 38",
                "Mod 7: 3",
            ]
        );
    }

    #[test]
    fn odd_then_odd_year() {
        // 7 -> 18 -> 9 -> 20 -> 20 mod 7 = 6
        let code = year_code(2007);
        assert_eq!(code.value(), 6);
        assert_eq!(
            code.trace(),
            &[
                "Take last 2 digits: 7",
                "Odd, so add 11: 18",
                "Divide by 2: 9",
                "Odd, so add 11: 20",
                "Mod 7: 6",
            ]
        );
    }

    #[test]
    fn even_then_odd_year() {
        // 26 -> 13 -> 24 -> 24 mod 7 = 3
        let code = year_code(2026);
        assert_eq!(code.value(), 3);
        assert_eq!(
            code.trace(),
            &[
                "Take last 2 digits: 26",
                "Even, so no change: 26",
                "Divide by 2: 13",
                "Odd, so add 11: 24",
                "Mod 7: 3",
            ]
        );
    }

    #[test]
    fn century_year() {
        // 00 -> 0 all the way through.
        let code = year_code(2000);
        assert_eq!(code.value(), 0);
        assert_eq!(code.trace()[0], "Take last 2 digits: 0");
    }

    #[test]
    fn always_five_trace_lines() {
        for year in 1900..2000 {
            assert_eq!(year_code(year).trace().len(), 5, "bad trace for {year}");
        }
    }

    #[test]
    fn value_in_range() {
        for year in 1..=200 {
            assert!(year_code(year).value() <= 6);
        }
    }

    #[test]
    fn periodic_with_period_28() {
        // Within a century the odd+11 reduction repeats every 28 years.
        for year in 1900..=1971 {
            assert_eq!(
                year_code(year).value(),
                year_code(year + 28).value(),
                "period-28 violated at {year}"
            );
        }
    }

    #[test]
    fn depends_only_on_last_two_digits() {
        for year in 0..100 {
            assert_eq!(year_code(year).value(), year_code(1900 + year).value());
        }
    }
}
