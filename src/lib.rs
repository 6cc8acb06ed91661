//! Merge-insertion sort, also known as Ford-Johnson sort.
//!
//! Minimizes the number of comparisons rather than the time spent. Adjacent elements are paired,
//! the larger element of each pair is sorted recursively, and the smaller ones are merged back
//! into that chain with binary searches whose order follows the Jacobsthal numbers. For small
//! inputs the worst case matches the information theoretic lower bound closely, see
//! [`ford_johnson_bound`].
//!
//! All functions return the number of comparisons they performed. The counter lives in the
//! invocation, so concurrent sorts on independent buffers don't interfere.

use std::cmp::Ordering;

mod chain;
mod comparator;
pub mod jacobsthal;
mod merge_insertion;
pub mod observe;
mod pairs;

pub use comparator::Slot;
pub use observe::{Event, LogObserver, NoopObserver, Observer, Phase};
pub use pairs::Pair;

use merge_insertion::merge_insertion_sort;

/// Sorts the slice in ascending order and returns the number of comparisons performed.
///
/// The sort is not stable, an element equal to elements already in the chain is inserted in
/// front of them.
#[inline]
pub fn sort<T>(v: &mut [T]) -> u64
where
    T: Ord,
{
    merge_insertion_sort(v, |a, b| a.lt(b), NoopObserver)
}

/// Sorts the slice with a comparator function and returns the number of comparisons performed.
///
/// Only `compare(a, b) == Ordering::Less` is consulted. Pairs with equal winners are matched up
/// with `==`, which therefore has to agree with the equivalence defined by `compare`. Matching
/// does not count as a comparison.
///
/// If `compare` does not implement a total order the resulting order is unspecified, but the
/// slice still holds its original elements. If `compare` panics the slice is left untouched.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> u64
where
    T: Eq,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_insertion_sort(v, |a, b| compare(a, b) == Ordering::Less, NoopObserver)
}

/// Like [`sort`], reporting every phase of every recursive call to `observer`.
pub fn sort_observed<T, O>(v: &mut [T], observer: O) -> u64
where
    T: Ord,
    O: Observer<T>,
{
    merge_insertion_sort(v, |a, b| a.lt(b), observer)
}

/// Like [`sort_by`], reporting every phase of every recursive call to `observer`.
pub fn sort_by_observed<T, F, O>(v: &mut [T], mut compare: F, observer: O) -> u64
where
    T: Eq,
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    merge_insertion_sort(v, |a, b| compare(a, b) == Ordering::Less, observer)
}

/// Worst case number of comparisons of merge-insertion sort for `len` elements,
/// `sum(ceil(log2(3k / 4)))` for `k` in `1..=len`.
///
/// 0, 1, 3, 5, 7, 10, 13, 16, 19, 22, 26, 30, ...
pub fn ford_johnson_bound(len: usize) -> u64 {
    (1..=len as u64)
        .map(|k| {
            // Smallest m with 2^m >= 3k / 4.
            let mut m = 0u64;
            while (4u64 << m) < 3 * k {
                m += 1;
            }
            m
        })
        .sum()
}
