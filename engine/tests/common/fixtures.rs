//! Test fixtures for sort routine tests

use rand::Rng;
use shared::AlgorithmId;

pub struct TestFixtures;

#[allow(dead_code)]
impl TestFixtures {
    pub const ALL: [AlgorithmId; 8] = [
        AlgorithmId::Bubble,
        AlgorithmId::Selection,
        AlgorithmId::Insertion,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
        AlgorithmId::Counting,
        AlgorithmId::Radix,
    ];

    /// Uniform values in `[1, 100]`, the default generator's domain
    pub fn random_array(len: usize) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        (0..len).map(|_| rng.gen_range(1..=100)).collect()
    }

    /// Non-negative values with a wider spread, including zero and multi-digit values
    pub fn random_non_negative(len: usize) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        (0..len).map(|_| rng.gen_range(0..=5_000)).collect()
    }

    pub fn reversed(len: usize) -> Vec<i64> {
        (1..=len as i64).rev().collect()
    }

    pub fn with_duplicates() -> Vec<i64> {
        vec![7, 3, 7, 1, 3, 9, 1, 7, 0, 3]
    }
}
