//! Wall-clock measurement of a single task and aggregation of repeated samples.

use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(mut test_fn: impl FnMut()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Like [`measure_duration`], but keeps the value returned by `task`.
pub fn measure<R>(task: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let value = task();

    (value, start.elapsed())
}

pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Mean and population standard deviation of a set of samples, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stats {
    pub mean_ms: f64,
    pub std_ms: f64,
}

impl Stats {
    /// Returns `None` for an empty sample set.
    pub fn from_samples(samples_ms: &[f64]) -> Option<Self> {
        if samples_ms.is_empty() {
            return None;
        }

        let count = samples_ms.len() as f64;
        let mean_ms = samples_ms.iter().sum::<f64>() / count;
        let variance = samples_ms
            .iter()
            .map(|sample| {
                let diff = sample - mean_ms;
                diff * diff
            })
            .sum::<f64>()
            / count;

        Some(Self {
            mean_ms,
            std_ms: variance.sqrt(),
        })
    }
}
