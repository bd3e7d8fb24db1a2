//! # doomsday_session
//!
//! Quiz-session bookkeeping for the Doomsday trainer: question and correct
//! counts, current streak, response-time statistics over correct answers,
//! and single-level discard of the most recent answer via an immutable
//! pre-answer snapshot.
//!
//! The engine stays stateless; everything mutable about a running quiz
//! lives here, in memory, for the lifetime of the process.

mod format;
mod session;

pub use format::format_duration;
pub use session::{QuizSession, SessionStats, TimingStats};
