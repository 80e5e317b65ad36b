mod present;

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::{Arg, ArgMatches, Command};
use serde::Serialize;

use record_sort::analysis::cases::HarnessReport;
use record_sort::analysis::stability::{
    analyze_stability, demonstrate_heap_instability, StabilityReport,
};
use record_sort::config::{parse_len, parse_limit, HarnessConfig};
use record_sort::error::SortError;
use record_sort::record::Record;
use record_sort::report::LogReporter;
use record_sort::timed::{heap_sort_reported, two_way_insertion_sort_reported};
use record_sort::{patterns, run_case_harness, text_format};

const HEAP_SORT_OUTPUT: &str = "heap_sort_output.txt";
const TWO_WAY_INSERTION_OUTPUT: &str = "two_way_insertion_output.txt";

const DEFAULT_LIMIT: &str = "100000";

type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Serialize)]
struct RunReport {
    records: usize,
    heapsort_elapsed: Duration,
    two_way_insertion_elapsed: Option<Duration>,
    two_way_insertion_error: Option<SortError>,
    stability: Option<StabilityReport>,
    harness: HarnessReport,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();

    let res = match matches.subcommand() {
        Some(("run", sub_matches)) => run(sub_matches),
        Some(("generate", sub_matches)) => generate(sub_matches),
        _ => unreachable!(),
    };

    if let Err(err) = res {
        log::error!("{err}");
        process::exit(1);
    }
}

fn cli() -> Command<'static> {
    Command::new("record-sort")
        .about("Sorts date and name keyed records with heapsort and two-way insertion sort")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Sorts an input file with both algorithms and compares them")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .value_name("FILE")
                        .help("Input file, one `YYYY-MM-DD<TAB>Last First Middle` record per line")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .value_name("DIR")
                        .help("Directory the sorted outputs are written to")
                        .takes_value(true)
                        .default_value("."),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_name("N")
                        .help("Read at most N records")
                        .takes_value(true)
                        .default_value(DEFAULT_LIMIT),
                )
                .arg(
                    Arg::new("two-way-max-len")
                        .long("two-way-max-len")
                        .value_name("N")
                        .help("Largest case input the two-way insertion sort is run on")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("case-sample-limit")
                        .long("case-sample-limit")
                        .value_name("N|none")
                        .help("Number of records the cases are derived from")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("json-report")
                        .long("json-report")
                        .value_name("FILE")
                        .help("Also write the results as JSON")
                        .takes_value(true),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Writes a sample input file")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_name("FILE")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("len")
                        .long("len")
                        .value_name("N")
                        .help("Number of records")
                        .takes_value(true)
                        .required(true),
                ),
        )
}

fn harness_config(matches: &ArgMatches) -> Result<HarnessConfig> {
    let mut config = HarnessConfig::from_env()?;

    if let Some(val) = matches.value_of("two-way-max-len") {
        config.two_way_max_len = parse_len("--two-way-max-len", val)?;
    }

    if let Some(val) = matches.value_of("case-sample-limit") {
        config.sample_limit = parse_limit("--case-sample-limit", val)?;
    }

    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = harness_config(matches)?;
    // Both have defaults.
    let output_dir = PathBuf::from(matches.value_of("output-dir").unwrap_or("."));
    let limit = parse_len("--limit", matches.value_of("limit").unwrap_or(DEFAULT_LIMIT))?;

    let input = matches
        .value_of("input")
        .ok_or("missing --input")?;

    let mut reporter = LogReporter;

    let records = {
        let file = File::open(input).map_err(|err| format!("can't open '{input}': {err}"))?;
        text_format::read_records(BufReader::new(file), limit, &mut reporter)?
    };

    if records.is_empty() {
        log::warn!("'{input}' contains no records");
    }

    fs::create_dir_all(&output_dir)?;

    let mut heap_sorted = records.clone();
    let heapsort_elapsed = heap_sort_reported(&mut heap_sorted, &mut reporter);
    write_sorted(
        &output_dir.join(HEAP_SORT_OUTPUT),
        &heap_sorted,
        heapsort_elapsed,
    )?;

    let mut two_way_sorted = records.clone();
    let two_way_result = two_way_insertion_sort_reported(&mut two_way_sorted, &mut reporter);
    if let Ok(elapsed) = two_way_result {
        write_sorted(
            &output_dir.join(TWO_WAY_INSERTION_OUTPUT),
            &two_way_sorted,
            elapsed,
        )?;
    }

    // A failed two-way sort left its copy unsorted, comparing it would be meaningless.
    let stability = match two_way_result {
        Ok(_) => Some(analyze_stability(&records, &heap_sorted, &two_way_sorted)?),
        Err(_) => None,
    };

    if let Some(stability) = &stability {
        present::stability(stability);
        if !stability.heapsort {
            present::instability_demonstration(&demonstrate_heap_instability());
        }
    }

    present::timing(records.len(), heapsort_elapsed, &two_way_result);

    let harness = run_case_harness(&records, &config, &mut reporter);
    present::harness(&harness);

    if let Some(path) = matches.value_of("json-report") {
        let report = RunReport {
            records: records.len(),
            heapsort_elapsed,
            two_way_insertion_elapsed: two_way_result.clone().ok(),
            two_way_insertion_error: two_way_result.err(),
            stability,
            harness,
        };

        serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), &report)?;
        log::info!("wrote report to {path}");
    }

    Ok(())
}

fn generate(matches: &ArgMatches) -> Result<()> {
    let output = matches.value_of("output").ok_or("missing --output")?;
    let len = parse_len("--len", matches.value_of("len").ok_or("missing --len")?)?;

    let records = patterns::sample_records(len);
    text_format::write_input(BufWriter::new(File::create(output)?), &records)?;
    log::info!(
        "wrote {len} records to {output}, seed: {}",
        patterns::random_init_seed()
    );

    Ok(())
}

fn write_sorted(path: &Path, records: &[Record], elapsed: Duration) -> Result<()> {
    text_format::write_sorted(BufWriter::new(File::create(path)?), records, elapsed)?;
    log::info!("wrote {} records to {}", records.len(), path.display());

    Ok(())
}
