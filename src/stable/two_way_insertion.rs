//! Two-way insertion sort
//!
//! Insertion sort into an auxiliary buffer that grows from its midpoint in both directions.
//! Elements smaller than the current minimum or greater than the current maximum are placed in
//! *O*(1), everything else is shifted into place from the right end.
//!
//! Stable, *O*(*n*) for ascending and descending inputs, *O*(*n*^2) worst-case, *O*(*n*)
//! auxiliary memory.

use crate::error::SortError;
use crate::record::{self, Record};
use crate::report::{Event, Reporter};

sort_impl!("two_way_insertion_stable", fallible);

// Progress is only worth reporting for inputs where the quadratic cost becomes noticeable.
const PROGRESS_MIN_LEN: usize = 1000;
const PROGRESS_INTERVAL: usize = 10_000;

/// Sorts the records in ascending composite order, preserving the order of tied records.
///
/// Fails without touching `v` if the auxiliary buffer can't be allocated.
#[inline]
pub fn sort(v: &mut [Record]) -> Result<(), SortError> {
    two_way_insertion_sort(v, &mut |a, b| record::is_less(a, b), &mut |_| {})
}

/// Same as [`sort`], reporting progress for large inputs.
pub fn sort_with_progress(v: &mut [Record], reporter: &mut dyn Reporter) -> Result<(), SortError> {
    let len = v.len();
    let report_progress = len > PROGRESS_MIN_LEN;

    two_way_insertion_sort(
        v,
        &mut |a, b| record::is_less(a, b),
        &mut |processed| {
            if report_progress && processed % PROGRESS_INTERVAL == 0 {
                reporter.report(Event::SortProgress {
                    algorithm: <SortImpl as crate::Sort>::NAME,
                    processed,
                    len,
                });
            }
        },
    )
}

/// `on_progress` is called with the index of every element after it was inserted.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn two_way_insertion_sort<T, F, P>(
    v: &mut [T],
    is_less: &mut F,
    on_progress: &mut P,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> bool,
    P: FnMut(usize),
{
    let len = v.len();
    if len <= 1 {
        return Ok(());
    }

    // The buffer holds indices into `v`. Elements stay where they are until the final
    // copy-back, which applies the resulting permutation.
    let mut buf = alloc_buffer(len)?;

    // `buf[left..=right]` is the sorted part, it starts out as the first element at the
    // midpoint. `left >= 1` and `right <= 2 * len - 1` hold throughout.
    let mut left = len;
    let mut right = len;
    buf[left] = 0;

    for i in 1..len {
        if is_less(&v[i], &v[buf[left]]) {
            left -= 1;
            buf[left] = i;
        } else if is_less(&v[buf[right]], &v[i]) {
            right += 1;
            buf[right] = i;
        } else {
            // `v[buf[left]] <= v[i]`, so the scan stops at `left` at the latest. Only strictly
            // greater elements are shifted, an equal element already in place stays in front of
            // `v[i]`.
            let mut j = right;
            while j >= left && is_less(&v[i], &v[buf[j]]) {
                buf[j + 1] = buf[j];
                j -= 1;
            }
            buf[j + 1] = i;
            right += 1;
        }

        on_progress(i);
    }

    debug_assert_eq!(right - left + 1, len);

    apply_permutation(v, &mut buf[left..left + len]);

    Ok(())
}

/// Allocates the `2 * len + 1` slot buffer, without aborting the process on failure.
fn alloc_buffer(len: usize) -> Result<Vec<usize>, SortError> {
    let alloc_err = SortError::BufferAllocation { len };

    let buf_len = len
        .checked_mul(2)
        .and_then(|double| double.checked_add(1))
        .ok_or_else(|| alloc_err.clone())?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(buf_len).map_err(|_| alloc_err)?;
    buf.resize(buf_len, 0);

    Ok(buf)
}

/// Rearranges `v` so that `v[i]` becomes the element previously at `v[order[i]]`.
///
/// `order` must be a permutation of `0..v.len()`, it is used as scratch space and holds the
/// identity permutation afterwards.
fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }

        // Follow the cycle through `start`, pulling each element into place. The element that
        // was at `start` travels along and ends up in the last slot of the cycle.
        let mut current = start;
        loop {
            let source = order[current];
            order[current] = current;
            if source == start {
                break;
            }

            v.swap(current, source);
            current = source;
        }
    }
}
