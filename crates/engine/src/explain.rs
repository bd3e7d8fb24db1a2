//! Renders a completed calculation as an ordered, human-readable
//! walkthrough.

use std::fmt;

use doomsday_calendar::mod7;

use crate::calculate::Calculation;

/// One step of the rendered walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationStep {
    /// Short name of the step ("Month adjustment", "Total", ...).
    pub label: String,
    /// The worked arithmetic for the step. May span multiple lines.
    pub detail: String,
}

/// Ordered walkthrough of one Doomsday computation.
///
/// Memorized years (2003..=2010) get the simplified phrasing that adds the
/// year's doomsday directly; all other years get the general phrasing with
/// the century anchor and the odd+11 year code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    steps: Vec<ExplanationStep>,
}

impl Explanation {
    /// The reasoning steps in computation order.
    pub fn steps(&self) -> &[ExplanationStep] {
        &self.steps
    }
}

impl fmt::Display for Explanation {
    /// Formats as a numbered list; multi-line details are indented under
    /// their step.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "How to solve:")?;
        for (i, step) in self.steps.iter().enumerate() {
            let mut lines = step.detail.lines();
            let first = lines.next().unwrap_or("");
            writeln!(f, "{:>3}. {}: {}", i + 1, step.label, first)?;
            for line in lines {
                writeln!(f, "     {line}")?;
            }
        }
        Ok(())
    }
}

/// Renders the explanation for a completed calculation.
///
/// Pure formatting: every number shown was already computed by
/// [`calculate`](crate::calculate); the only branching selects phrasing.
pub fn render(calc: &Calculation) -> Explanation {
    let mut steps = Vec::new();

    steps.push(ExplanationStep {
        label: "Month adjustment".to_string(),
        detail: format!("{} = {}", calc.date().month_name(), calc.month_value()),
    });

    steps.push(ExplanationStep {
        label: "Day adjustment".to_string(),
        detail: day_detail(calc),
    });

    let leap_step = (calc.leap_adjustment() != 0).then(|| ExplanationStep {
        label: "Leap year adjustment".to_string(),
        detail: format!(
            "-1 ({} is a leap year and the month is January or February)",
            calc.date().year()
        ),
    });

    match calc.known() {
        Some(known) => {
            steps.push(ExplanationStep {
                label: "Year doomsday".to_string(),
                detail: format!(
                    "{} = +{} ({})",
                    calc.date().year(),
                    known.anchor().offset(),
                    known.anchor()
                ),
            });
            if let Some(step) = leap_step {
                steps.push(step);
            }
            let sum = if calc.leap_adjustment() != 0 {
                format!(
                    "{} + {} + {} - 1 = {}",
                    calc.month_value(),
                    calc.day_mod7(),
                    known.anchor().offset(),
                    known.total()
                )
            } else {
                format!(
                    "{} + {} + {} = {}",
                    calc.month_value(),
                    calc.day_mod7(),
                    known.anchor().offset(),
                    known.total()
                )
            };
            steps.push(ExplanationStep {
                label: "Total".to_string(),
                detail: sum,
            });
            steps.push(ExplanationStep {
                label: "Answer".to_string(),
                detail: format!(
                    "{} % 7 = {} -> {}",
                    known.total(),
                    mod7(known.total() as i64),
                    calc.weekday()
                ),
            });
        }
        None => {
            steps.push(ExplanationStep {
                label: "Century anchor".to_string(),
                detail: format!(
                    "century {} = +{}",
                    calc.century(),
                    calc.century_adjustment()
                ),
            });
            steps.push(ExplanationStep {
                label: "Year code".to_string(),
                detail: calc.year_code().trace().join("\n"),
            });
            if let Some(step) = leap_step {
                steps.push(step);
            }
            let sum = if calc.leap_adjustment() != 0 {
                format!(
                    "{} (month) + {} (day) + {} (century) - {} (year) - 1 (leap) = {}",
                    calc.month_value(),
                    calc.day_mod7(),
                    calc.century_adjustment(),
                    calc.year_code().value(),
                    calc.total()
                )
            } else {
                format!(
                    "{} (month) + {} (day) + {} (century) - {} (year) = {}",
                    calc.month_value(),
                    calc.day_mod7(),
                    calc.century_adjustment(),
                    calc.year_code().value(),
                    calc.total()
                )
            };
            steps.push(ExplanationStep {
                label: "Total".to_string(),
                detail: sum,
            });
            steps.push(ExplanationStep {
                label: "Answer".to_string(),
                detail: format!(
                    "{} mod 7 = {} -> {}",
                    calc.total(),
                    mod7(calc.total() as i64),
                    calc.weekday()
                ),
            });
        }
    }

    Explanation { steps }
}

/// Phrases the day-of-month reduction, only mentioning the mod when the day
/// is at least 7.
fn day_detail(calc: &Calculation) -> String {
    let day = calc.date().day();
    if day < 7 {
        format!("+{day}")
    } else if day == 7 {
        "+7 (7 % 7 = 0)".to_string()
    } else {
        format!("+{day} (or {} after % 7)", calc.day_mod7())
    }
}
