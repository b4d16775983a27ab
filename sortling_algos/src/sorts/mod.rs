//! Implementations of six classic array sorting algorithms behind a single
//! [`Sorter`] trait.
//!
//! # Example
//!
//! ```
//! use sortling_algos::sorts::BubbleSorter;
//! use sortling_algos::sorts::Sorter;
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! BubbleSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```

pub mod benchmark;
mod sorters;

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::shell_sorter::ShellSorter;

/// Every sorting algorithm in this crate implements the trait `Sorter`.
///
/// A call to [`sort`](Sorter::sort) reorders the slice in non-decreasing
/// order. The slice afterwards holds the same multiset of values it held
/// before; empty and single-element slices are a no-op for every sorter.
pub trait Sorter<T>
where
    T: Ord,
{
    fn sort(&self, slice: &mut [T]);
}
