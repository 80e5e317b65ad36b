//! This module implements functionality for measuring the duration of some task.

use std::time::{Duration, Instant};

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration(test_fn: impl FnOnce()) -> Duration {
    let start = Instant::now();

    test_fn();

    start.elapsed()
}

/// Same as [`measure_duration`] but passes through the result of `test_fn`.
#[inline(never)]
pub fn measure_result<R>(test_fn: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();

    let result = test_fn();

    (result, start.elapsed())
}
