//! Heapsort
//!
//! In-place, *O*(*n* \* log(*n*)) worst-case, no auxiliary memory.
//!
//! Not stable. Moving the root to the end of the slice and re-sifting routinely carries a record
//! past another record with the same key.

use crate::record::{self, Record};

sort_impl!("heapsort_unstable");

/// Sorts the records in ascending composite order, but might not preserve the order of tied
/// records.
#[inline]
pub fn sort(v: &mut [Record]) {
    heapsort(v, &mut |a, b| record::is_less(a, b));
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Build a max-heap bottom up, starting at the last node that has a child.
    for i in (0..len / 2).rev() {
        sift_down(v, i, is_less);
    }

    // Pop maximal elements from the heap.
    for i in (1..len).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Choose the greater child, the left one on a tie.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        v.swap(node, child);
        node = child;
    }
}
