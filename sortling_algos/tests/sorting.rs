use std::{cell::Cell, cmp::Ordering, rc::Rc};

use rand::{rngs::StdRng, SeedableRng};
use sortling_algos::sequence;
use sortling_algos::sorts::benchmark::SortEvaluator;
use sortling_algos::sorts::{
    BubbleSorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, ShellSorter, Sorter,
};

fn all_sorters() -> Vec<(&'static str, Box<dyn Sorter<i32>>)> {
    vec![
        ("insertion", Box::new(InsertionSorter)),
        ("bubble", Box::new(BubbleSorter)),
        ("selection", Box::new(SelectionSorter)),
        ("shell", Box::new(ShellSorter)),
        ("merge", Box::new(MergeSorter)),
        ("quick", Box::new(QuickSorter::default())),
        ("quick (random pivot)", Box::new(QuickSorter { random_pivot: true })),
    ]
}

#[test]
fn every_sorter_yields_a_sorted_permutation() {
    let mut rng = StdRng::seed_from_u64(42);
    for (name, sorter) in all_sorters() {
        for n in [0usize, 1, 2, 10, 257] {
            let input = sequence::random_sequence_with(&mut rng, n, 100);

            let mut sorted = input.clone();
            sorter.sort(&mut sorted);

            let mut expected = input;
            expected.sort();
            assert_eq!(sorted, expected, "{name} over {n} elements");
        }
    }
}

#[test]
fn every_sorter_handles_the_reference_sequence() {
    for (name, sorter) in all_sorters() {
        let mut seq = vec![5, 3, 8, 1, 9, 2];
        sorter.sort(&mut seq);
        assert_eq!(seq, [1, 2, 3, 5, 8, 9], "{name}");
    }
}

#[test]
fn sorting_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for (name, sorter) in all_sorters() {
        let mut once = sequence::random_sequence_with(&mut rng, 50, 20);
        sorter.sort(&mut once);

        let mut twice = once.clone();
        sorter.sort(&mut twice);
        assert_eq!(once, twice, "{name}");
    }
}

#[test]
fn all_equal_elements_are_untouched() {
    for (name, sorter) in all_sorters() {
        let mut seq = vec![7; 33];
        sorter.sort(&mut seq);
        assert_eq!(seq, vec![7; 33], "{name}");
    }
}

/// Orders by `key` alone; `tag` records the original position so tests can
/// observe whether equal elements kept their relative order.
#[derive(Debug, Clone, Copy)]
struct Keyed {
    key: u8,
    tag: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn keyed(keys: &[u8]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Keyed { key, tag })
        .collect()
}

#[test]
fn stable_sorters_preserve_equal_element_order() {
    let stable: Vec<(&str, Box<dyn Sorter<Keyed>>)> = vec![
        ("insertion", Box::new(InsertionSorter)),
        ("bubble", Box::new(BubbleSorter)),
        ("merge", Box::new(MergeSorter)),
    ];

    for (name, sorter) in stable {
        let mut seq = keyed(&[3, 1, 3, 2, 1, 3, 2, 1]);
        sorter.sort(&mut seq);

        // equal keys are contiguous after sorting, so adjacent checks cover
        // every equal pair
        for w in seq.windows(2) {
            assert!(w[0].key <= w[1].key, "{name} left the slice unsorted");
            if w[0].key == w[1].key {
                assert!(
                    w[0].tag < w[1].tag,
                    "{name} reordered equal keys: {:?} before {:?}",
                    w[0],
                    w[1]
                );
            }
        }
    }
}

#[test]
fn merge_takes_left_half_elements_first_on_ties() {
    // two sorted halves with a tied key of 3: the left half's copy (tag 1)
    // must land before the right half's (tag 4)
    let mut seq = keyed(&[1, 3, 5, 2, 3, 6]);
    MergeSorter.sort(&mut seq);

    let keys: Vec<u8> = seq.iter().map(|k| k.key).collect();
    assert_eq!(keys, [1, 2, 3, 3, 5, 6]);

    let tags_of_threes: Vec<usize> = seq.iter().filter(|k| k.key == 3).map(|k| k.tag).collect();
    assert_eq!(tags_of_threes, [1, 4]);
}

#[test]
fn quick_sort_is_quadratic_on_descending_input() {
    let n: usize = 64;
    let counter = Rc::new(Cell::new(0));
    let mut values: Vec<SortEvaluator<usize>> = (0..n)
        .rev()
        .map(|x| SortEvaluator::new(x, counter.clone()))
        .collect();

    counter.set(0);
    QuickSorter::default().sort(&mut values);

    // fixed last-element pivot: every partition of a descending range is
    // maximally lopsided, costing (len - 1) comparisons per level
    let comparisons = counter.get();
    assert!(
        comparisons >= n * (n - 1) / 2,
        "expected at least {} comparisons, saw {comparisons}",
        n * (n - 1) / 2
    );
}

#[test]
fn merge_sort_stays_linearithmic_on_descending_input() {
    let n: usize = 1024;
    let counter = Rc::new(Cell::new(0));
    let mut values: Vec<SortEvaluator<usize>> = (0..n)
        .rev()
        .map(|x| SortEvaluator::new(x, counter.clone()))
        .collect();

    counter.set(0);
    MergeSorter.sort(&mut values);

    // n log2(n) = 10240 for n = 1024; leave headroom for the merge tails
    let comparisons = counter.get();
    assert!(
        comparisons <= 2 * n * 10,
        "expected O(n log n) comparisons, saw {comparisons}"
    );
}
