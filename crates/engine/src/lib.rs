//! # doomsday_engine
//!
//! The Doomsday calculation engine: pure, stateless functions that generate
//! quiz dates, compute the weekday by the anchor-day algorithm with every
//! intermediate quantity retained, and render the worked explanation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use doomsday_engine::{evaluate, random_date, YearRange};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let date = random_date(YearRange::default(), &mut rng);
//! let evaluation = evaluate(date);
//! println!("{date} -> {:?}", evaluation.weekday());
//! println!("{}", evaluation.explanation());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `generate` | `YearRange` and uniform random date generation |
//! | `anchors` | Month adjustments, century anchor, memorized years |
//! | `year_code` | The odd+11 year reduction with its trace |
//! | `calculate` | The Doomsday computation, all intermediates retained |
//! | `explain` | Walkthrough rendering (simplified and general templates) |
//! | `evaluate` | Scoring entry point combining resolver and calculator |
//! | `error` | Error types |
//!
//! Every operation is a pure function of its inputs reading fixed tables,
//! so calls are safe from any number of threads without coordination.

mod anchors;
mod calculate;
mod error;
mod evaluate;
mod explain;
mod generate;
mod year_code;

pub use anchors::{century_anchor, known_year_anchor, month_adjustment};
pub use calculate::{calculate, Calculation, KnownYear};
pub use error::EngineError;
pub use evaluate::{evaluate, Evaluation};
pub use explain::{render, Explanation, ExplanationStep};
pub use generate::{random_date, YearRange};
pub use year_code::{year_code, YearCode};
