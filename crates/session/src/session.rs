//! Mutable quiz-session state with snapshot-based undo.

use std::time::Duration;

use tracing::debug;

/// Aggregate statistics of a session, as displayed to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    /// Questions answered (discarded questions excluded).
    pub total: u32,
    /// Correctly answered questions.
    pub correct: u32,
    /// Percentage of correct answers, 0.0 when nothing was answered yet.
    pub accuracy: f64,
    /// Length of the current run of consecutive correct answers.
    pub current_streak: u32,
    /// Response-time aggregates over correct answers; `None` until the
    /// first correct answer.
    pub timing: Option<TimingStats>,
}

/// Response-time aggregates. Only correct answers count toward timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    /// Shortest response time.
    pub fastest: Duration,
    /// Longest response time.
    pub slowest: Duration,
    /// Mean response time.
    pub average: Duration,
}

/// Immutable copy of the aggregates, taken before an answer is recorded so
/// the answer can be discarded atomically afterwards.
#[derive(Debug, Clone)]
struct Snapshot {
    question_count: u32,
    correct_count: u32,
    current_streak: u32,
    correct_response_times: Vec<Duration>,
}

/// One quiz session's bookkeeping.
///
/// In-memory only; state lives exactly as long as the process. The engine
/// stays stateless, so undoing an answer is a plain aggregate swap here.
#[derive(Debug, Default)]
pub struct QuizSession {
    question_count: u32,
    correct_count: u32,
    current_streak: u32,
    correct_response_times: Vec<Duration>,
    last_snapshot: Option<Snapshot>,
}

impl QuizSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one answered question.
    ///
    /// Takes a snapshot of the aggregates first, enabling a single-level
    /// [`discard_last`](Self::discard_last). A correct answer extends the
    /// streak and contributes its response time to the timing statistics; a
    /// wrong answer resets the streak.
    pub fn record_answer(&mut self, correct: bool, elapsed: Duration) {
        self.last_snapshot = Some(self.snapshot());
        self.question_count += 1;
        if correct {
            self.correct_count += 1;
            self.current_streak += 1;
            self.correct_response_times.push(elapsed);
        } else {
            self.current_streak = 0;
        }
        debug!(
            total = self.question_count,
            correct = self.correct_count,
            streak = self.current_streak,
            "answer recorded"
        );
    }

    /// Discards the most recent answer, atomically restoring the aggregates
    /// captured before it was recorded. At most one level: returns `false`
    /// when no discardable answer exists.
    pub fn discard_last(&mut self) -> bool {
        let Some(snapshot) = self.last_snapshot.take() else {
            return false;
        };
        self.question_count = snapshot.question_count;
        self.correct_count = snapshot.correct_count;
        self.current_streak = snapshot.current_streak;
        self.correct_response_times = snapshot.correct_response_times;
        debug!(total = self.question_count, "last answer discarded");
        true
    }

    /// Clears every aggregate and the undo snapshot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current aggregate statistics.
    pub fn stats(&self) -> SessionStats {
        let accuracy = if self.question_count > 0 {
            f64::from(self.correct_count) / f64::from(self.question_count) * 100.0
        } else {
            0.0
        };
        let timing = if self.correct_response_times.is_empty() {
            None
        } else {
            let secs: Vec<f64> = self
                .correct_response_times
                .iter()
                .map(Duration::as_secs_f64)
                .collect();
            Some(TimingStats {
                fastest: Duration::from_secs_f64(doomsday_stats::min(&secs)),
                slowest: Duration::from_secs_f64(doomsday_stats::max(&secs)),
                average: Duration::from_secs_f64(doomsday_stats::mean(&secs)),
            })
        };
        SessionStats {
            total: self.question_count,
            correct: self.correct_count,
            accuracy,
            current_streak: self.current_streak,
            timing,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            question_count: self.question_count,
            correct_count: self.correct_count,
            current_streak: self.current_streak,
            correct_response_times: self.correct_response_times.clone(),
        }
    }
}
