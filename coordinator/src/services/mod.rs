//! Production service implementations

pub mod generator;
pub mod publisher;

pub use generator::RandomArrayGenerator;
pub use publisher::PublishingSink;
