//! Stability verification.
//!
//! A sort is stable if tied records, same date and same full name, keep their relative input
//! order. Records are located in the sorted output by full identity, key and input position,
//! the key alone can't tell tied records apart.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::VerifyError;
use crate::record::{Date, FullName, Record};
use crate::unstable::heapsort;

/// Checks whether every group of tied records in `original` appears in the same relative order
/// in `sorted`.
///
/// `sorted` must be a permutation of `original`. If any record, tied or not, is missing or
/// duplicated that is reported as an error, never as "not stable".
pub fn verify_stability(original: &[Record], sorted: &[Record]) -> Result<bool, VerifyError> {
    if original.len() != sorted.len() {
        return Err(VerifyError::LengthMismatch {
            original: original.len(),
            sorted: sorted.len(),
        });
    }

    let mut sorted_index = HashMap::with_capacity(sorted.len());
    for (i, record) in sorted.iter().enumerate() {
        if sorted_index.insert(record, i).is_some() {
            return Err(VerifyError::DuplicateRecord {
                position: record.position(),
            });
        }
    }

    // Equal lengths and no duplicates, so a record that is absent here was replaced by one that
    // never was in the input.
    if let Some(missing) = original.iter().find(|r| !sorted_index.contains_key(r)) {
        return Err(VerifyError::MissingRecord {
            position: missing.position(),
        });
    }

    let mut is_stable = true;

    for group in tied_groups(original) {
        let mut prev_idx = None;

        for record in group {
            let idx = sorted_index[&record];

            if prev_idx.map_or(false, |prev| idx < prev) {
                is_stable = false;
            }
            prev_idx = Some(idx);
        }
    }

    Ok(is_stable)
}

/// Groups of two or more tied records, in order of first appearance, each group in input order.
fn tied_groups(records: &[Record]) -> Vec<Vec<&Record>> {
    let mut group_idx: HashMap<(&Date, &FullName), usize> = HashMap::new();
    let mut groups: Vec<Vec<&Record>> = Vec::new();

    for record in records {
        let idx = *group_idx.entry(record.key()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[idx].push(record);
    }

    groups.retain(|group| group.len() > 1);
    groups
}

/// Stability of both sorts on the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StabilityReport {
    pub heapsort: bool,
    pub two_way_insertion: bool,
}

pub fn analyze_stability(
    original: &[Record],
    heapsort_sorted: &[Record],
    two_way_sorted: &[Record],
) -> Result<StabilityReport, VerifyError> {
    Ok(StabilityReport {
        heapsort: verify_stability(original, heapsort_sorted)?,
        two_way_insertion: verify_stability(original, two_way_sorted)?,
    })
}

/// Four records on the same date, the records at positions 1 and 3 are tied.
pub fn instability_fixture() -> Vec<Record> {
    let date = Date::new(1, 1, 2023);

    vec![
        Record::new(date, FullName::new("Ivanov", "Aleksei", "Petrovich"), 1),
        Record::new(date, FullName::new("Petrov", "Ivan", "Sergeevich"), 2),
        Record::new(date, FullName::new("Ivanov", "Aleksei", "Petrovich"), 3),
        Record::new(date, FullName::new("Sidorov", "Mikhail", "Aleksandrovich"), 4),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstabilityDemonstration {
    pub before: Vec<Record>,
    pub after: Vec<Record>,
    /// Whether the tied records at positions 1 and 3 swapped their relative order.
    pub inverted: bool,
}

/// Heap sorts [`instability_fixture`].
pub fn demonstrate_heap_instability() -> InstabilityDemonstration {
    let before = instability_fixture();
    let mut after = before.clone();
    heapsort::sort(&mut after);

    let idx_of = |position: usize| after.iter().position(|r| r.position() == position);
    let inverted = matches!((idx_of(1), idx_of(3)), (Some(a), Some(b)) if b < a);

    InstabilityDemonstration {
        before,
        after,
        inverted,
    }
}
