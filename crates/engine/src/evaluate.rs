//! The engine's scoring entry point: authoritative weekday plus the worked
//! explanation for one date.

use doomsday_calendar::{resolve_weekday, Date, Weekday};
use tracing::error;

use crate::calculate::{calculate, Calculation};
use crate::explain::{render, Explanation};

/// Outcome of evaluating one date.
#[derive(Debug, Clone)]
pub struct Evaluation {
    weekday: Option<Weekday>,
    calculation: Calculation,
    explanation: Explanation,
}

impl Evaluation {
    /// The authoritative weekday, or `None` when calendar resolution failed
    /// on both paths (the "Unknown" sentinel; skip the question, keep the
    /// session).
    pub fn weekday(&self) -> Option<Weekday> {
        self.weekday
    }

    /// The full intermediate trace of the Doomsday computation.
    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    /// The rendered walkthrough.
    pub fn explanation(&self) -> &Explanation {
        &self.explanation
    }
}

/// Evaluates a date: resolves the weekday through the calendar resolver and
/// computes the Doomsday walkthrough. Never panics for a valid [`Date`].
///
/// The resolver's answer is authoritative for scoring. The Doomsday
/// calculation must agree with it for every valid date; a mismatch means an
/// anchor table is wrong and is reported at error level.
pub fn evaluate(date: Date) -> Evaluation {
    let calculation = calculate(date);
    let explanation = render(&calculation);
    let weekday = resolve_weekday(date);

    if let Some(resolved) = weekday {
        if resolved != calculation.weekday() {
            error!(
                %date,
                resolved = %resolved,
                calculated = %calculation.weekday(),
                "calendar resolver and Doomsday calculation disagree"
            );
        }
    }

    Evaluation {
        weekday,
        calculation,
        explanation,
    }
}
