//! Test fixtures for coordinator tests

pub struct TestFixtures;

#[allow(dead_code)]
impl TestFixtures {
    pub const DEFAULT_SIZE: usize = 10;

    /// Input whose bubble-sort snapshots are known exactly
    pub fn bubble_example() -> Vec<i64> {
        vec![5, 3, 8, 1]
    }

    pub fn bubble_example_steps() -> Vec<Vec<i64>> {
        vec![vec![3, 5, 8, 1], vec![3, 5, 1, 8], vec![3, 1, 5, 8], vec![1, 3, 5, 8]]
    }

    /// Ten values in descending order; insertion sort needs 54 steps for it
    pub fn reversed_ten() -> Vec<i64> {
        (1..=10).rev().collect()
    }

    pub fn with_negative() -> Vec<i64> {
        vec![3, -1, 2]
    }
}
