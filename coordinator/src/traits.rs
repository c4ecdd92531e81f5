//! Trait definitions with mockall annotations for testing

/// Source of fresh arrays for `generate`
///
/// Implementations return exactly `size` values, each within `min..=max`.
#[mockall::automock]
pub trait ArrayGenerator: Send + Sync {
    fn generate(&self, size: usize, min: i64, max: i64) -> Vec<i64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_generator_instantiation() {
        let mut generator = MockArrayGenerator::new();
        generator
            .expect_generate()
            .returning(|size, min, _| vec![min; size]);
        assert_eq!(generator.generate(3, 7, 9), vec![7, 7, 7]);
    }
}
