use crate::sorts::Sorter;

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use sortling_algos::sorts::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort, repeatedly steps
/// through the slice, compares adjacent elements and swaps them if they
/// are in the wrong order. After pass `i` the `i` largest elements have
/// bubbled to their final positions at the tail, so each pass stops one
/// slot earlier than the last.
///
/// This variant always runs the full n-1 passes: there is no early-exit
/// check for an already sorted slice, so the sort performs O(n²)
/// comparisons in every case. Adjacent swaps only fire on a strict `>`,
/// which keeps the sort stable.
#[derive(Default)]
pub struct BubbleSorter;

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        let n = slice.len();
        for pass in 1..n {
            // the last `pass - 1` slots already hold their final values
            for i in 1..=(n - pass) {
                if slice[i - 1] > slice[i] {
                    slice.swap(i - 1, i);
                }
            }
        }
    }
}
