//! Best, worst and representative case timing of both sorts.
//!
//! From a sample three inputs are derived, the sample sorted ascending, sorted descending and
//! as given. Both sorts are timed on each. The two-way insertion sort is only run up to a
//! configurable input length, above it the case is reported as skipped. Drawing conclusions from
//! the numbers is left to the caller.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::config::HarnessConfig;
use crate::error::SortError;
use crate::measure::{measure_duration, measure_result};
use crate::record::{self, Record};
use crate::report::{Event, Reporter};
use crate::stable::two_way_insertion;
use crate::unstable::heapsort;
use crate::Sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Case {
    /// Ascending input.
    Best,
    /// Descending input.
    Worst,
    /// The sample as given.
    Representative,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Best, Case::Worst, Case::Representative];
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Case::Best => "best case (ascending)",
            Case::Worst => "worst case (descending)",
            Case::Representative => "representative case (as given)",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInputs {
    pub best: Vec<Record>,
    pub worst: Vec<Record>,
    pub representative: Vec<Record>,
}

impl CaseInputs {
    pub fn get(&self, case: Case) -> &[Record] {
        match case {
            Case::Best => &self.best,
            Case::Worst => &self.worst,
            Case::Representative => &self.representative,
        }
    }
}

/// Derives the three case inputs, each a permutation of `sample`.
///
/// Both orderings are stable, so tied records keep their sample order in the best case and
/// stay in sample order in the worst case as well.
pub fn derive_cases(sample: &[Record]) -> CaseInputs {
    let mut best = sample.to_vec();
    best.sort_by(record::compare);

    let mut worst = sample.to_vec();
    worst.sort_by(|a, b| record::compare(b, a));

    CaseInputs {
        best,
        worst,
        representative: sample.to_vec(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub elapsed: Duration,
    /// Comparator calls made by the sort, counted in a separate untimed run.
    pub comparisons: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TwoWayOutcome {
    Completed(Measurement),
    /// The input was longer than `threshold`, the sort was not run.
    Skipped { threshold: usize },
    /// The sort was run but aborted.
    Failed(SortError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub case: Case,
    pub len: usize,
    pub heapsort: Measurement,
    pub two_way_insertion: TwoWayOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessReport {
    pub config: HarnessConfig,
    pub cases: Vec<CaseReport>,
}

/// Times both sorts on the best, worst and representative case derived from `sample`.
///
/// A failing two-way insertion sort only affects the report of its own case.
pub fn run_case_harness(
    sample: &[Record],
    config: &HarnessConfig,
    reporter: &mut dyn Reporter,
) -> HarnessReport {
    run_case_harness_with(
        sample,
        config,
        reporter,
        &mut two_way_insertion::sort,
        &mut |v: &mut [Record], comparisons: &mut u64| {
            two_way_insertion::two_way_insertion_sort(
                v,
                &mut |a, b| {
                    *comparisons += 1;
                    record::is_less(a, b)
                },
                &mut |_| {},
            )
        },
    )
}

/// `two_way_sort` is the timed call, `two_way_sort_counting` the separate untimed run that counts
/// comparator calls.
fn run_case_harness_with<T, C>(
    sample: &[Record],
    config: &HarnessConfig,
    reporter: &mut dyn Reporter,
    two_way_sort: &mut T,
    two_way_sort_counting: &mut C,
) -> HarnessReport
where
    T: FnMut(&mut [Record]) -> Result<(), SortError>,
    C: FnMut(&mut [Record], &mut u64) -> Result<(), SortError>,
{
    let sample_len = config
        .sample_limit
        .map_or(sample.len(), |limit| limit.min(sample.len()));
    let inputs = derive_cases(&sample[..sample_len]);

    let mut cases = Vec::with_capacity(Case::ALL.len());
    for case in Case::ALL {
        let input = inputs.get(case);
        let len = input.len();
        reporter.report(Event::CaseStarted { case, len });

        let heapsort = measure_heapsort(input, reporter);

        let two_way_insertion = if len <= config.two_way_max_len {
            match measure_two_way_insertion(input, reporter, two_way_sort, two_way_sort_counting)
            {
                Ok(measurement) => TwoWayOutcome::Completed(measurement),
                Err(error) => TwoWayOutcome::Failed(error),
            }
        } else {
            reporter.report(Event::SortSkipped {
                algorithm: <two_way_insertion::SortImpl as Sort>::NAME,
                len,
                threshold: config.two_way_max_len,
            });
            TwoWayOutcome::Skipped {
                threshold: config.two_way_max_len,
            }
        };

        cases.push(CaseReport {
            case,
            len,
            heapsort,
            two_way_insertion,
        });
    }

    HarnessReport {
        config: *config,
        cases,
    }
}

fn measure_heapsort(input: &[Record], reporter: &mut dyn Reporter) -> Measurement {
    let algorithm = <heapsort::SortImpl as Sort>::NAME;
    let len = input.len();

    let mut v = input.to_vec();
    reporter.report(Event::SortStarted { algorithm, len });
    let elapsed = measure_duration(|| heapsort::sort(&mut v));
    reporter.report(Event::SortFinished {
        algorithm,
        len,
        elapsed,
    });

    let mut comparisons = 0u64;
    heapsort::heapsort(&mut input.to_vec(), &mut |a, b| {
        comparisons += 1;
        record::is_less(a, b)
    });

    Measurement {
        elapsed,
        comparisons,
    }
}

fn measure_two_way_insertion<T, C>(
    input: &[Record],
    reporter: &mut dyn Reporter,
    two_way_sort: &mut T,
    two_way_sort_counting: &mut C,
) -> Result<Measurement, SortError>
where
    T: FnMut(&mut [Record]) -> Result<(), SortError>,
    C: FnMut(&mut [Record], &mut u64) -> Result<(), SortError>,
{
    let algorithm = <two_way_insertion::SortImpl as Sort>::NAME;
    let len = input.len();

    let mut v = input.to_vec();
    reporter.report(Event::SortStarted { algorithm, len });
    let (result, elapsed) = measure_result(|| two_way_sort(&mut v));

    let result = result.and_then(|()| {
        let mut comparisons = 0u64;
        two_way_sort_counting(&mut input.to_vec(), &mut comparisons).map(|()| comparisons)
    });

    match result {
        Ok(comparisons) => {
            reporter.report(Event::SortFinished {
                algorithm,
                len,
                elapsed,
            });
            Ok(Measurement {
                elapsed,
                comparisons,
            })
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
