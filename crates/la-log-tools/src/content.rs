//! Pluggable content analysis: the step that runs once a log file is
//! known to be readable.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::error::{AnalysisError, LogResult};
use crate::types::LogTask;

/// Strategy for analyzing the contents of one log file.
///
/// Format-specific parsers implement this; the coordinator only sees the
/// trait, so swapping the simulated analyzer for a real one does not
/// touch the fan-out code.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Short identifier used in progress logs.
    fn name(&self) -> &str;

    /// Analyze the log described by `task`. Failures should be reported
    /// as [`AnalysisError::Parse`].
    async fn analyze(&self, task: &LogTask) -> LogResult<()>;
}

/// Placeholder analyzer: sleeps for a random bounded delay and fails with
/// a small injected probability.
#[derive(Debug, Clone)]
pub struct SimulatedAnalyzer {
    min_delay: Duration,
    max_delay: Duration,
    failure_rate: f64,
}

impl SimulatedAnalyzer {
    /// `failure_rate` is clamped to `0.0..=1.0`; the delay bounds are
    /// swapped if given in the wrong order.
    pub fn new(min_delay: Duration, max_delay: Duration, failure_rate: f64) -> Self {
        let (min_delay, max_delay) = if min_delay <= max_delay {
            (min_delay, max_delay)
        } else {
            (max_delay, min_delay)
        };
        let failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        Self {
            min_delay,
            max_delay,
            failure_rate,
        }
    }

    /// No delay and no injected failures.
    pub fn reliable() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, 0.0)
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    fn roll(&self) -> (Duration, bool) {
        let mut rng = rand::thread_rng();
        let min_ms = self.min_delay.as_millis() as u64;
        let max_ms = self.max_delay.as_millis() as u64;
        let delay = Duration::from_millis(rng.gen_range(min_ms..=max_ms));
        (delay, rng.gen_bool(self.failure_rate))
    }
}

impl Default for SimulatedAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_millis(50), Duration::from_millis(200), 0.1)
    }
}

#[async_trait]
impl ContentAnalyzer for SimulatedAnalyzer {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn analyze(&self, task: &LogTask) -> LogResult<()> {
        let (delay, fail) = self.roll();
        tokio::time::sleep(delay).await;

        if fail {
            return Err(AnalysisError::parse(
                &task.id,
                "simulated parsing failure",
                "random parse error",
            ));
        }
        Ok(())
    }
}
