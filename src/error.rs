//! Error types for body extraction and model handling

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during body extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// Input was empty or contained no extractable text
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The pipeline ran but produced an empty body
    #[error("no body detected: {0}")]
    NoBodyDetected(String),

    /// The label sequence probability fell below the configured threshold
    #[error("{message} (confidence: {confidence:.2}, threshold: {threshold:.2})")]
    LowConfidence {
        message: String,
        confidence: f64,
        threshold: f64,
    },
}

/// Errors that can occur while loading or training CRF models
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model file does not exist
    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No model has been loaded yet
    #[error("no CRF model loaded")]
    NotLoaded,

    /// The model file could not be read by the CRF backend
    #[error("failed to load CRF model: {0}")]
    Load(String),

    /// Viterbi decoding failed inside the CRF backend
    #[error("CRF decoding failed: {0}")]
    Decode(String),

    /// Training failed inside the CRF backend
    #[error("CRF training failed: {0}")]
    Train(String),

    /// A training record was malformed
    #[error("invalid training data: {0}")]
    InvalidData(String),

    /// Label sequence length does not match the content line count
    #[error("label count {actual} does not match content line count {expected}")]
    LabelMismatch { expected: usize, actual: usize },

    /// Filesystem error while reading or writing model artifacts
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractionError>;
