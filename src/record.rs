//! The record type and the composite ordering shared by both sorts.
//!
//! Records are ordered by date ascending, and records with the same date by full name
//! descending. Two records with equal date and full name are tied, they only differ in the
//! position they had in the input.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Calendar date, ordered by year, then month, then day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Date {
    day: u32,
    month: u32,
    year: i32,
}

impl Date {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Last, first and middle name.
///
/// The order is the reverse of the natural text order, field by field, starting with the last
/// name. So `Sidorov` sorts before `Petrov`, which sorts before `Ivanov`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FullName {
    last: String,
    first: String,
    middle: String,
}

impl FullName {
    pub fn new(
        last: impl Into<String>,
        first: impl Into<String>,
        middle: impl Into<String>,
    ) -> Self {
        Self {
            last: last.into(),
            first: first.into(),
            middle: middle.into(),
        }
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn middle(&self) -> &str {
        &self.middle
    }
}

impl Ord for FullName {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .last
            .cmp(&self.last)
            .then_with(|| other.first.cmp(&self.first))
            .then_with(|| other.middle.cmp(&self.middle))
    }
}

impl PartialOrd for FullName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.last, self.first, self.middle)
    }
}

/// A single input record.
///
/// `position` is the 1-based index the record had when it was read. It is not part of the sort
/// key, it only exists to tell tied records apart.
///
/// There is no `Ord` impl, equality includes the position but the sort key doesn't. Use
/// [`compare`] to order records.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    date: Date,
    name: FullName,
    position: usize,
}

impl Record {
    pub fn new(date: Date, name: FullName, position: usize) -> Self {
        Self {
            date,
            name,
            position,
        }
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn name(&self) -> &FullName {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The composite sort key. Tuple ordering of the key is the composite order.
    pub fn key(&self) -> (&Date, &FullName) {
        (&self.date, &self.name)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.date, self.name, self.position)
    }
}

/// Composite order: date ascending, then full name descending.
#[inline]
pub fn compare(a: &Record, b: &Record) -> Ordering {
    a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name))
}

#[inline]
pub fn is_less(a: &Record, b: &Record) -> bool {
    compare(a, b) == Ordering::Less
}
