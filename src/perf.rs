use serde::Serialize;

/// One timed run of the benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub thread_count: u64,
    /// Wall-clock time of the parallel region, in seconds.
    pub elapsed_secs: f64,
}

/// Speedup and efficiency of a sample relative to the first (sequential) one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub thread_count: u64,
    pub elapsed_secs: f64,
    pub speedup: f64,
    /// Speedup per thread, as a percentage.
    pub efficiency: f64,
}

/// Derives a metric for every sample, using `samples[0]` as the baseline.
///
/// Returns `None` when there is nothing to compare against. Zero elapsed
/// times are not guarded and produce non-finite values.
pub fn compute_metrics(samples: &[Sample]) -> Option<Vec<Metric>> {
    let baseline = samples.first()?.elapsed_secs;

    let metrics = samples
        .iter()
        .map(|sample| {
            let speedup = baseline / sample.elapsed_secs;
            Metric {
                thread_count: sample.thread_count,
                elapsed_secs: sample.elapsed_secs,
                speedup,
                efficiency: speedup / sample.thread_count as f64 * 100.0,
            }
        })
        .collect();

    Some(metrics)
}
