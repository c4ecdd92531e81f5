//! Common test utilities for engine integration tests

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{InvariantSink, TestHelpers};
