use crate::sorts::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Usage
///```
/// use sortling_algos::sorts::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Insertion sort builds the final sorted array one item at a time. For
/// each position it takes the next unsorted element and walks it leftward
/// past every strictly greater predecessor until it sits in its place
/// within the sorted prefix.
///
/// Because the walk only moves past *strictly* greater elements, equal
/// elements never trade places: the sort is stable. The sort runs in place
/// with O(1) extra space, O(n²) comparisons in the worst and average case,
/// and O(n) on an already sorted slice.
#[derive(Default)]
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        for unsorted in 1..slice.len() {
            let mut i = unsorted;
            while i > 0 && slice[i - 1] > slice[i] {
                slice.swap(i - 1, i);
                i -= 1;
            }
        }
    }
}
