//! Matching and scoring engine.

pub mod classifier;
pub mod engine;
pub mod expander;
pub mod experience;
pub mod extractor;
pub mod insights;
pub mod similarity;
pub mod spans;
