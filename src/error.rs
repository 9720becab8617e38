//! Error handling for the ATS matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsMatcherError {
    fn from(err: anyhow::Error) -> Self {
        AtsMatcherError::AnalysisFailed(err.to_string())
    }
}
