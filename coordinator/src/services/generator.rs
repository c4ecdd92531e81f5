//! Uniform random array generation

use rand::Rng;

use crate::traits::ArrayGenerator;

/// Draws every value independently and uniformly from the inclusive range
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomArrayGenerator;

impl RandomArrayGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ArrayGenerator for RandomArrayGenerator {
    fn generate(&self, size: usize, min: i64, max: i64) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        (0..size).map(|_| rng.gen_range(min..=max)).collect()
    }
}
