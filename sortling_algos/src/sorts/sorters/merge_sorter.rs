use crate::sorts::Sorter;

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortling_algos::sorts::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Merge sort is a divide-and-conquer algorithm. The slice is split at its
/// midpoint and each half is sorted recursively; slices of length 0 or 1
/// are already sorted and terminate the recursion. The two sorted halves
/// are then merged: each half is copied out into an owned buffer and the
/// buffers are interleaved back into the original slice in order.
///
/// The merge takes from the left buffer on ties (`<=`), so equal elements
/// keep their relative order and the sort is stable. O(n log n)
/// comparisons in every case; the per-merge buffers make it the one
/// algorithm here that is not in place, costing O(n) auxiliary space that
/// is released as each merge returns.
///
/// The buffer copies are why this sorter alone requires `T: Clone` on top
/// of `T: Ord`.
#[derive(Default)]
pub struct MergeSorter;

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        merge_sort(slice);
    }
}

fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    if slice.len() <= 1 {
        return;
    }
    let mid = slice.len() / 2;
    merge_sort(&mut slice[..mid]);
    merge_sort(&mut slice[mid..]);
    merge(slice, mid);
}

/// Merges the two sorted halves `slice[..mid]` and `slice[mid..]`.
fn merge<T: Ord + Clone>(slice: &mut [T], mid: usize) {
    let mut left = slice[..mid].to_vec().into_iter().peekable();
    let mut right = slice[mid..].to_vec().into_iter().peekable();

    // the buffers hold exactly slice.len() elements between them, so one of
    // them always has a next value while slots remain
    for slot in slice.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            // left wins ties to keep the sort stable
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };
        *slot = if take_left {
            left.next().expect("left buffer not exhausted")
        } else {
            right.next().expect("right buffer not exhausted")
        };
    }
}
