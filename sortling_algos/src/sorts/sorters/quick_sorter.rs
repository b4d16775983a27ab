use rand::Rng;

use crate::sorts::Sorter;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use sortling_algos::sorts::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter::default().sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Quick sort partitions the slice around a pivot and recurses on the two
/// sides. This implementation uses the Lomuto scheme: the last element of
/// the range is the pivot, a left-to-right scan swaps every element
/// strictly less than the pivot into a growing left partition, and the
/// pivot is finally swapped to the partition boundary, its sorted
/// position. Long-range swaps make the sort unstable. In place, O(n log n)
/// comparisons on average.
///
/// The fixed last-element pivot is the scheme's known weakness: on already
/// sorted or reverse-sorted input every partition is maximally lopsided
/// and the sort degrades to O(n²) comparisons. That behavior is kept
/// as-is; setting `random_pivot` swaps a uniformly chosen element into the
/// pivot slot before each partition, which makes the degenerate case
/// vanishingly unlikely on any fixed input:
///
///```
/// use sortling_algos::sorts::{QuickSorter, Sorter};
///
/// let mut slice: Vec<u32> = (0..500).rev().collect();
/// QuickSorter { random_pivot: true }.sort(&mut slice);
/// assert_eq!(slice, (0..500).collect::<Vec<_>>());
///```
///
/// To sort a sub-range, sort the subslice: `sorter.sort(&mut seq[low..=high])`.
#[derive(Default)]
pub struct QuickSorter {
    pub random_pivot: bool,
}

impl<T> Sorter<T> for QuickSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        quicksort(slice, self.random_pivot);
    }
}

fn quicksort<T: Ord>(slice: &mut [T], random_pivot: bool) {
    if slice.len() <= 1 {
        return;
    }

    if random_pivot {
        let chosen = rand::thread_rng().gen_range(0..slice.len());
        slice.swap(chosen, slice.len() - 1);
    }

    let boundary = partition(slice);
    let (left, right) = slice.split_at_mut(boundary);
    quicksort(left, random_pivot);
    // right[0] is the pivot, already in its final position
    quicksort(&mut right[1..], random_pivot);
}

/// Lomuto partition around the last element. Returns the pivot's final
/// index within `slice`.
fn partition<T: Ord>(slice: &mut [T]) -> usize {
    let pivot = slice.len() - 1;
    let mut boundary = 0;
    for i in 0..pivot {
        if slice[i] < slice[pivot] {
            slice.swap(i, boundary);
            boundary += 1;
        }
    }
    slice.swap(boundary, pivot);
    boundary
}
