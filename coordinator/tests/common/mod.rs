//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the coordinator test suites.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{CoordinatorBuilder, TestHelpers};
