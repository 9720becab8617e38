//! Report rendering

pub mod report;
