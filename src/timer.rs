use std::time::{Duration, Instant};

/// Monotonic stopwatch, started on construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Formats a duration as seconds with millisecond precision, e.g. `0.125`.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.3}", elapsed.as_secs_f64())
}
