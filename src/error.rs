use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Invalid input: expected {expected} features, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
    #[error("Invalid feature #{index} '{value}': {source}")]
    InvalidFeature {
        index: usize,
        value: String,
        source: ParseFloatError,
    },
    #[error("Invalid tree: {0}")]
    InvalidTree(String),
}
