use std::sync::LazyLock;
use crate::perf::Sample;

// 500x500 matrix multiply, `omp parallel for collapse(2)`, copied by hand from the results file.
pub static PERF_DATA_OMP_MXM: LazyLock<Vec<Sample>> = LazyLock::new(|| {  vec![
Sample { thread_count: 1, elapsed_secs: 0.269674 },
Sample { thread_count: 2, elapsed_secs: 0.121995 },
Sample { thread_count: 4, elapsed_secs: 0.067952 },
Sample { thread_count: 8, elapsed_secs: 0.052612 },
Sample { thread_count: 16, elapsed_secs: 0.049701 },
] });
