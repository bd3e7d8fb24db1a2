//! Elapsed-time formatting for quiz feedback.

use std::time::Duration;

/// Formats a response time the way the quiz displays it: seconds with one
/// decimal below a minute ("4.2s"), minutes and zero-padded seconds at or
/// above ("1:05.3").
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let minutes = (secs / 60.0).floor() as u64;
        let remaining = secs - minutes as f64 * 60.0;
        format!("{minutes}:{remaining:04.1}")
    }
}
