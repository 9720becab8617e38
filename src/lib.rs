//! ATS matcher library
//!
//! Scores how well a candidate document matches a requirement document by
//! extracting canonical skills, classifying requirements into must-have,
//! nice-to-have and OR-groups, granting equivalence-based partial credit and
//! composing everything into a bounded, explainable score.

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod output;
pub mod semantic;
pub mod taxonomy;
pub mod text;

pub use config::Config;
pub use error::{AtsMatcherError, Result};
pub use matching::engine::{MatchEngine, MatchReport, ScoreBreakdown};
pub use taxonomy::SkillTaxonomy;
