//! Comparison-counting benchmark for the six sorters.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::{cell::Cell, rc::Rc, time::Instant};

use prettytable::{row, Table};

use super::{
    BubbleSorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, ShellSorter, Sorter,
};

const SIZES: [usize; 5] = [0, 1, 100, 1_000, 10_000];
const SORTER_COUNT: usize = 6;

/// Element wrapper that counts comparisons.
///
/// Only `elem` takes part in the comparison; every call through
/// `PartialEq`/`PartialOrd`/`Ord` bumps the shared counter, so sorting a
/// slice of these measures exactly how many comparisons a sorter made.
#[derive(Clone)]
pub struct SortEvaluator<T> {
    elem: T,
    // updated on every comparison, hence the Rc<Cell<_>>
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    pub fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
        self.elem.cmp(&other.elem)
    }
}

/// Sorts `values`, returning the number of comparisons the sorter made.
pub fn run_bench<T, S>(
    sorter: S,
    values: &mut [SortEvaluator<T>],
    comparisons: Rc<Cell<usize>>,
) -> usize
where
    T: Ord + Eq + Clone,
    S: Sorter<SortEvaluator<T>>,
{
    comparisons.set(0);
    sorter.sort(values);

    comparisons.get()
}

fn bench_sorter<S>(
    name: &str,
    sorter: S,
    values: &[SortEvaluator<i32>],
    counter: &Rc<Cell<usize>>,
    table: &mut Table,
    pb: &ProgressBar,
) where
    S: Sorter<SortEvaluator<i32>>,
{
    // every sorter gets its own fresh copy of the unsorted data
    let mut values = values.to_vec();
    let now = Instant::now();
    let took = run_bench(sorter, &mut values, counter.clone());
    table.add_row(row![name, took.to_string(), format!("{:?}", now.elapsed())]);
    pb.inc(1);
}

/// Runs every sorter over growing input sizes and prints a table of
/// comparison counts and wall time per size.
pub fn run_benchmarks() {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));

    let pb = ProgressBar::new((SIZES.len() * SORTER_COUNT) as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "Benchmarks -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] ({pos}/{len}, ETA: {eta})",
        )
        .unwrap(),
    );

    for &n in &SIZES {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(SortEvaluator::new(random.gen::<i32>(), counter.clone()));
        }

        let mut table = Table::new();
        table.add_row(row![
            "Sorter".bold(),
            "Comparisons Made".bold(),
            "Time Taken".bold()
        ]);

        bench_sorter("Insertion Sort", InsertionSorter, &values, &counter, &mut table, &pb);
        bench_sorter("Bubble Sort", BubbleSorter, &values, &counter, &mut table, &pb);
        bench_sorter("Selection Sort", SelectionSorter, &values, &counter, &mut table, &pb);
        bench_sorter("Shell Sort", ShellSorter, &values, &counter, &mut table, &pb);
        bench_sorter("Merge Sort", MergeSorter, &values, &counter, &mut table, &pb);
        bench_sorter(
            "Quick Sort",
            QuickSorter::default(),
            &values,
            &counter,
            &mut table,
            &pb,
        );

        pb.println(format!(
            "{} {}",
            "List Size ->".bold().underline().blue(),
            n.to_string().bold()
        ));
        pb.suspend(|| {
            table.printstd();
            println!();
        });
    }

    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn counter_tracks_comparisons() {
        let counter = Rc::new(Cell::new(0));
        let a = SortEvaluator::new(1, counter.clone());
        let b = SortEvaluator::new(2, counter.clone());

        assert!(a < b);
        assert_eq!(counter.get(), 1);

        assert!(a != b);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn run_bench_resets_the_counter() {
        let counter = Rc::new(Cell::new(999));
        let mut values: Vec<_> = [3, 1, 2]
            .into_iter()
            .map(|x| SortEvaluator::new(x, counter.clone()))
            .collect();

        let took = run_bench(InsertionSorter, &mut values, counter.clone());
        assert!(took > 0);
        assert!(took < 999);
    }
}
