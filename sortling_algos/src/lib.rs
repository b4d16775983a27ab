//! # Introduction
//!
//! Six classic array sorting algorithms (insertion, bubble, selection,
//! shell, merge, quick) implemented over mutable slices behind a common
//! [`Sorter`](sorts::Sorter) trait, plus helpers for generating and
//! printing random integer sequences and a comparison-counting benchmark.
//!
//! ```
//! use sortling_algos::sorts::{MergeSorter, Sorter};
//!
//! let mut seq = vec![5, 3, 8, 1, 9, 2];
//! MergeSorter.sort(&mut seq);
//! assert_eq!(seq, [1, 2, 3, 5, 8, 9]);
//! ```

pub mod sequence;
pub mod sorts;

use clap::{Args, Subcommand};
use colored::Colorize;

use sorts::{
    BubbleSorter, InsertionSorter, MergeSorter, QuickSorter, SelectionSorter, ShellSorter, Sorter,
};

/// The `sorts` subcommand tree mounted by the `sortling` binary. Install
/// the `sortling` crate and run `sortling sorts` to see what options are
/// available.
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct SortsArgs {
    #[command(subcommand)]
    command: SortsCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum SortsCommands {
    /// Run every sorter over a fresh random sequence, printing it before and
    /// after sorting.
    Demo {
        /// Number of elements to generate per sequence.
        #[arg(short, long, default_value_t = 10)]
        size: usize,

        /// Exclusive upper bound for the generated values.
        #[arg(short, long, default_value_t = 100)]
        bound: i32,
    },

    /// Compare the sorters by comparison count and wall time over growing
    /// input sizes.
    Bench,
}

impl SortsArgs {
    pub fn run(self) {
        match self.command {
            SortsCommands::Demo { size, bound } => demo(size, bound),
            SortsCommands::Bench => sorts::benchmark::run_benchmarks(),
        }
    }
}

fn demo(size: usize, bound: i32) {
    let sorters: [(&str, Box<dyn Sorter<i32>>); 6] = [
        ("Insertion Sort", Box::new(InsertionSorter)),
        ("Bubble Sort", Box::new(BubbleSorter)),
        ("Selection Sort", Box::new(SelectionSorter)),
        ("Shell Sort", Box::new(ShellSorter)),
        ("Merge Sort", Box::new(MergeSorter)),
        ("Quick Sort", Box::new(QuickSorter::default())),
    ];

    for (name, sorter) in sorters {
        let mut seq = sequence::random_sequence(size, bound);

        println!("{} {}:", "Before".bold().blue(), name.bold());
        println!("{}", sequence::format_sequence(&seq));

        sorter.sort(&mut seq);

        println!("{} {}:", "After".bold().green(), name.bold());
        println!("{}\n", sequence::format_sequence(&seq));
    }
}
