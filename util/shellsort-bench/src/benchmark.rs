use std::hint::black_box;
use std::num::NonZeroUsize;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use shellsort::{patterns, GapSequence};

use crate::error::Result;
use crate::measure::{as_millis_f64, measure_duration, Stats};

/// Largest value produced for benchmark inputs, the smallest is 0.
pub const MAX_VALUE: i64 = 1_000_000;

/// One aggregated measurement, the unit of the CSV and JSON reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub implementation: String,
    pub n: usize,
    pub mean_ms: f64,
    pub std_ms: f64,
}

/// Something that can sort a benchmark input and report how long it took.
pub trait Runner {
    fn label(&self) -> &str;

    /// Sorts a copy of `data` and returns the elapsed wall-clock time in milliseconds.
    fn time_ms(&mut self, data: &[i64]) -> Result<f64>;
}

/// Sorts in the current process with the library.
pub struct InProcess {
    sequence: GapSequence,
}

impl InProcess {
    pub fn new(sequence: GapSequence) -> Self {
        Self { sequence }
    }
}

impl Runner for InProcess {
    fn label(&self) -> &str {
        "rust"
    }

    fn time_ms(&mut self, data: &[i64]) -> Result<f64> {
        let mut v = data.to_vec();
        let sequence = self.sequence;

        let duration = measure_duration(|| shellsort::sort(black_box(v.as_mut_slice()), sequence));
        black_box(&v); // side-effect

        debug_assert!(v.windows(2).all(|w| w[0] <= w[1]));

        Ok(as_millis_f64(duration))
    }
}

/// Input for repetition `rep` of size `n`. The repetition index is the seed, so every runner sees
/// the same arrays.
pub fn gen_array(n: usize, rep: usize) -> Vec<i64> {
    patterns::random_uniform(n, 0..=MAX_VALUE, rep as u64)
}

pub fn run_benchmark(
    runner: &mut dyn Runner,
    sizes: &[usize],
    reps: NonZeroUsize,
) -> Result<Vec<BenchmarkRow>> {
    // Pin the benchmark to the same core to improve repeatability.
    pin_thread_to_core();

    let mut rows = Vec::with_capacity(sizes.len());

    for &n in sizes {
        let samples = (0..reps.get())
            .map(|rep| runner.time_ms(&gen_array(n, rep)))
            .collect::<Result<Vec<_>>>()?;

        // reps is non-zero, so there is always at least one sample.
        let Some(stats) = Stats::from_samples(&samples) else {
            continue;
        };

        info!(
            "[{}] n={n:6} mean={:8.3} ms std={:8.3} ms",
            runner.label(),
            stats.mean_ms,
            stats.std_ms
        );

        rows.push(BenchmarkRow {
            implementation: runner.label().to_owned(),
            n,
            mean_ms: stats.mean_ms,
            std_ms: stats.std_ms,
        });
    }

    Ok(rows)
}

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = const { Cell::new(false) } }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            let pinned = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
                .map_or(false, |core_id| core_affinity::set_for_current(*core_id));

            if !pinned {
                warn!("could not pin benchmark thread to core {pin_core_id}, timings may be noisy");
            }

            affinity_already_set.set(true);
        }
    });
}
