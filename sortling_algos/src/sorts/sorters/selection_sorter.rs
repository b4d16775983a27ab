use crate::sorts::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use sortling_algos::sorts::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort divides the slice into a sorted prefix and an unsorted
/// suffix. Each round scans the suffix for the index of its smallest
/// element and swaps that element to the front of the suffix, growing the
/// sorted prefix by one.
///
/// The long-range swap can jump an element over equal ones, so the sort is
/// not stable. It performs O(n²) comparisons in every case but at most
/// n-1 element swaps, which is its one advantage where writes are
/// expensive.
#[derive(Default)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 0..slice.len() {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..slice.len() {
                if slice[i] < slice[smallest_in_rest] {
                    smallest_in_rest = i;
                }
            }
            if unsorted != smallest_in_rest {
                slice.swap(unsorted, smallest_in_rest);
            }
        }
    }
}
