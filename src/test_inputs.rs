//! Deterministic inputs and a sort-based reference shared by the median tests

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::Sample;

/// Input sizes every median implementation is checked against
pub const SIZES: [usize; 8] = [0, 1, 2, 3, 4, 10, 13, 1001];

/// Every input shape the median implementations are checked against
pub const GENERATORS: [fn(usize) -> Vec<i32>; 4] = [random, ascending, descending, duplicates];

pub fn random(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.random()).collect()
}

/// Strictly increasing, with random gaps
pub fn ascending(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut s: i32 = rng.random_range(0..1_000_000);
    (0..size)
        .map(|_| {
            s += rng.random_range(1..=5);
            s
        })
        .collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

/// Only a handful of distinct values
pub fn duplicates(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.random_range(0..4)).collect()
}

/// Median by sorting a copy of `values`
pub fn reference_median<T: Sample>(values: &[T]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    match n {
        0 => None,
        _ if n % 2 == 1 => Some(sorted[n / 2].to_f64()),
        _ => Some(sorted[n / 2 - 1].average(sorted[n / 2])),
    }
}
