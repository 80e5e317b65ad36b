//! Reporting sink passed into the sorts and the analysis.
//!
//! Nothing in this crate prints on its own. Callers hand in a [`Reporter`] and decide what to do
//! with the events, forward them to `log`, collect them, or drop them.

use std::time::Duration;

use crate::analysis::cases::Case;
use crate::error::{ParseError, SortError};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SortStarted {
        algorithm: &'static str,
        len: usize,
    },
    SortProgress {
        algorithm: &'static str,
        processed: usize,
        len: usize,
    },
    SortFinished {
        algorithm: &'static str,
        len: usize,
        elapsed: Duration,
    },
    SortFailed {
        algorithm: &'static str,
        len: usize,
        error: SortError,
    },
    SortSkipped {
        algorithm: &'static str,
        len: usize,
        threshold: usize,
    },
    CaseStarted {
        case: Case,
        len: usize,
    },
    RecordsRead {
        count: usize,
    },
    MalformedLine {
        error: ParseError,
    },
}

pub trait Reporter {
    fn report(&mut self, event: Event);
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: Event) {}
}

/// Collects events in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for EventLog {
    fn report(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: Event) {
        match event {
            Event::SortStarted { algorithm, len } => {
                log::info!("{algorithm}: sorting {len} records");
            }
            Event::SortProgress {
                algorithm,
                processed,
                len,
            } => {
                log::debug!("{algorithm}: processed {processed}/{len}");
            }
            Event::SortFinished {
                algorithm,
                len,
                elapsed,
            } => {
                log::info!(
                    "{algorithm}: sorted {len} records in {} ms",
                    elapsed.as_millis()
                );
            }
            Event::SortFailed {
                algorithm,
                len,
                error,
            } => {
                log::warn!("{algorithm}: aborted after failure on {len} records: {error}");
            }
            Event::SortSkipped {
                algorithm,
                len,
                threshold,
            } => {
                log::info!("{algorithm}: skipped, {len} records exceed the limit of {threshold}");
            }
            Event::CaseStarted { case, len } => {
                log::info!("{case}: {len} records");
            }
            Event::RecordsRead { count } => {
                log::info!("read {count} records");
            }
            Event::MalformedLine { error } => {
                log::warn!("skipping malformed input, {error}");
            }
        }
    }
}
