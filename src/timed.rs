//! Timed entry points for both sorts.
//!
//! The measured duration covers only the sort call, not copying the input or writing the
//! output.

use std::time::Duration;

use crate::error::SortError;
use crate::measure::{measure_duration, measure_result};
use crate::record::Record;
use crate::report::{Event, NullReporter, Reporter};
use crate::stable::two_way_insertion;
use crate::unstable::heapsort;
use crate::Sort;

/// Sorts `v` in place with heapsort and returns the elapsed time.
pub fn heap_sort(v: &mut [Record]) -> Duration {
    heap_sort_reported(v, &mut NullReporter)
}

/// Sorts `v` in place with the two-way insertion sort and returns the elapsed time.
///
/// On failure `v` is unchanged and no time is reported.
pub fn two_way_insertion_sort(v: &mut [Record]) -> Result<Duration, SortError> {
    two_way_insertion_sort_reported(v, &mut NullReporter)
}

pub fn heap_sort_reported(v: &mut [Record], reporter: &mut dyn Reporter) -> Duration {
    let algorithm = <heapsort::SortImpl as Sort>::NAME;
    let len = v.len();

    reporter.report(Event::SortStarted { algorithm, len });
    let elapsed = measure_duration(|| heapsort::sort(v));
    reporter.report(Event::SortFinished {
        algorithm,
        len,
        elapsed,
    });

    elapsed
}

pub fn two_way_insertion_sort_reported(
    v: &mut [Record],
    reporter: &mut dyn Reporter,
) -> Result<Duration, SortError> {
    let algorithm = <two_way_insertion::SortImpl as Sort>::NAME;
    let len = v.len();

    reporter.report(Event::SortStarted { algorithm, len });
    let (result, elapsed) =
        measure_result(|| two_way_insertion::sort_with_progress(v, &mut *reporter));

    match result {
        Ok(()) => {
            reporter.report(Event::SortFinished {
                algorithm,
                len,
                elapsed,
            });
            Ok(elapsed)
        }
        Err(error) => {
            reporter.report(Event::SortFailed {
                algorithm,
                len,
                error: error.clone(),
            });
            Err(error)
        }
    }
}
