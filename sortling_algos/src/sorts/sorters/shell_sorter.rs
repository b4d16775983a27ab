use crate::sorts::Sorter;

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort)
///
/// # Usage
///```
/// use sortling_algos::sorts::{ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Shell sort is insertion sort generalized over a shrinking gap sequence.
/// The gap starts at n/2 and halves every round until it reaches 0; within
/// a round, elements `gap` apart are insertion-sorted against each other.
/// Early rounds move far-out-of-place elements long distances cheaply, so
/// the final gap-1 round (plain insertion sort) runs over a nearly sorted
/// slice.
///
/// The gapped walks jump elements over equal ones, so the sort is not
/// stable. With this halving gap sequence the average case is roughly
/// O(n^1.5): asymptotically behind merge and quick sort, but well ahead of
/// plain insertion sort on medium inputs, still with O(1) extra space.
#[derive(Default)]
pub struct ShellSorter;

impl<T> Sorter<T> for ShellSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        let mut gap = slice.len() / 2;
        while gap > 0 {
            for unsorted in gap..slice.len() {
                let mut i = unsorted;
                while i >= gap && slice[i - gap] > slice[i] {
                    slice.swap(i - gap, i);
                    i -= gap;
                }
            }
            gap /= 2;
        }
    }
}
