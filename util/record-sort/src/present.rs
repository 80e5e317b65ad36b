//! Console output of the results.

use std::time::Duration;

use record_sort::analysis::cases::{HarnessReport, Measurement, TwoWayOutcome};
use record_sort::analysis::stability::{InstabilityDemonstration, StabilityReport};
use record_sort::error::SortError;
use record_sort::record::Record;

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn stable_str(is_stable: bool) -> &'static str {
    if is_stable {
        "stable"
    } else {
        "NOT stable"
    }
}

pub fn stability(report: &StabilityReport) {
    println!("\nStability on the input:");
    println!("  heapsort:             {}", stable_str(report.heapsort));
    println!(
        "  two-way insertion:    {}",
        stable_str(report.two_way_insertion)
    );
}

fn print_records(records: &[Record]) {
    for record in records {
        println!("    {record}");
    }
}

pub fn instability_demonstration(demo: &InstabilityDemonstration) {
    println!("\nHeapsort on four records with a tied pair at positions 1 and 3:");
    println!("  before:");
    print_records(&demo.before);
    println!("  after:");
    print_records(&demo.after);

    if demo.inverted {
        println!("  The tied records swapped their order.");
    } else {
        println!("  The tied records kept their order on this input.");
    }
}

pub fn timing(len: usize, heapsort: Duration, two_way: &Result<Duration, SortError>) {
    println!("\nSorting {len} records:");
    println!("  heapsort:             {:.3} ms", millis(heapsort));

    match two_way {
        Ok(two_way) => {
            println!("  two-way insertion:    {:.3} ms", millis(*two_way));

            let (faster, slower, speedup) = if heapsort <= *two_way {
                ("heapsort", "two-way insertion", ratio(*two_way, heapsort))
            } else {
                ("two-way insertion", "heapsort", ratio(heapsort, *two_way))
            };

            match speedup {
                Some(speedup) => println!("  {faster} was {speedup:.2}x faster than {slower}"),
                None => println!("  both finished too fast to compare"),
            }
        }
        Err(err) => println!("  two-way insertion:    aborted, {err}"),
    }
}

fn ratio(slow: Duration, fast: Duration) -> Option<f64> {
    if fast.is_zero() {
        None
    } else {
        Some(slow.as_secs_f64() / fast.as_secs_f64())
    }
}

fn measurement_str(m: &Measurement) -> String {
    format!("{:>10.3} ms {:>12} cmp", millis(m.elapsed), m.comparisons)
}

pub fn harness(report: &HarnessReport) {
    println!("\nCases:");

    for case in &report.cases {
        println!("  {} of {} records", case.case, case.len);
        println!("    heapsort:           {}", measurement_str(&case.heapsort));

        let two_way = match &case.two_way_insertion {
            TwoWayOutcome::Completed(m) => measurement_str(m),
            TwoWayOutcome::Skipped { threshold } => {
                format!("skipped, more than {threshold} records")
            }
            TwoWayOutcome::Failed(err) => format!("aborted, {err}"),
        };
        println!("    two-way insertion:  {two_way}");
    }
}
