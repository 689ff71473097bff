//! Per-handler wall clock timing

use std::time::{Duration, Instant};
use tracing::Level;

/// Measures one handler invocation and logs the result in microseconds.
///
/// ```rust,ignore
/// let timer = HandlerTimer::start("index", Level::INFO);
/// let response = Html(page);
/// timer.finish();
/// ```
#[derive(Debug)]
pub struct HandlerTimer {
    label: &'static str,
    level: Level,
    start: Instant,
}

impl HandlerTimer {
    /// Start timing. `level` is `DEBUG` or `INFO`; anything else logs at `INFO`.
    #[must_use]
    pub fn start(label: &'static str, level: Level) -> Self {
        Self {
            label,
            level,
            start: Instant::now(),
        }
    }

    /// Stop timing, log, and return the elapsed time
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

        if self.level == Level::DEBUG {
            tracing::debug!(
                handler = self.label,
                elapsed_us,
                "{} handler took {} microseconds",
                self.label,
                elapsed_us
            );
        } else {
            tracing::info!(
                handler = self.label,
                elapsed_us,
                "{} handler took {} microseconds",
                self.label,
                elapsed_us
            );
        }

        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reports_elapsed_time() {
        let timer = HandlerTimer::start("index", Level::DEBUG);
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.finish() >= Duration::from_millis(2));
    }

    #[test]
    fn test_other_levels_do_not_panic() {
        let _ = HandlerTimer::start("sse", Level::TRACE).finish();
        let _ = HandlerTimer::start("sse", Level::ERROR).finish();
    }
}
