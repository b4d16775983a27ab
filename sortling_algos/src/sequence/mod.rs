//! Random sequence generation and display formatting for the sorting demo.
//!
//! Neither helper is part of the sorting contract: the sorters take any
//! `&mut [T]` where `T: Ord`, however it was produced. These exist so the
//! demo and tests have integer sequences to chew on and a uniform way to
//! print them.

use std::fmt::Display;

use rand::Rng;

/// Generates `size` integers drawn uniformly from `0..bound`.
///
/// Values come from [`rand::thread_rng`], a cryptographically strong
/// generator. For a deterministic or custom source, use
/// [`random_sequence_with`].
///
/// # Panics
///
/// Panics if `bound` is not positive (the value range would be empty).
pub fn random_sequence(size: usize, bound: i32) -> Vec<i32> {
    random_sequence_with(&mut rand::thread_rng(), size, bound)
}

/// Like [`random_sequence`], drawing from the given generator instead of a
/// process-wide one. Tests seed a [`rand::rngs::StdRng`] through this to
/// get reproducible sequences.
pub fn random_sequence_with<R: Rng>(rng: &mut R, size: usize, bound: i32) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(0..bound)).collect()
}

/// Renders a sequence as a single line of space-separated elements.
///
/// An empty sequence renders as the empty string.
///
/// ```
/// use sortling_algos::sequence::format_sequence;
///
/// assert_eq!(format_sequence(&[5, 3, 8]), "5 3 8");
/// ```
pub fn format_sequence<T: Display>(seq: &[T]) -> String {
    seq.iter()
        .map(|elem| elem.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generates_requested_length_within_bound() {
        let seq = random_sequence(100, 10);
        assert_eq!(seq.len(), 100);
        assert!(seq.iter().all(|&x| (0..10).contains(&x)));
    }

    #[test]
    fn empty_sequence() {
        assert!(random_sequence(0, 100).is_empty());
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let a = random_sequence_with(&mut StdRng::seed_from_u64(7), 20, 100);
        let b = random_sequence_with(&mut StdRng::seed_from_u64(7), 20, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn formats_space_separated() {
        assert_eq!(format_sequence(&[5, 3, 8, 1, 9, 2]), "5 3 8 1 9 2");
        assert_eq!(format_sequence(&[42]), "42");
    }

    #[test]
    fn formats_empty_as_empty_string() {
        assert_eq!(format_sequence::<i32>(&[]), "");
    }
}
