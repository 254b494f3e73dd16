//! Error types for the factoid QA engine.
//!
//! This module defines a unified error enum covering the ambient failure
//! categories: configuration, I/O, corpus loading, annotation and
//! serialization. Answering a question never produces one of these; a query
//! that cannot be answered degrades to a no-answer response instead.

use thiserror::Error;

/// Unified error type for the factoid workspace.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus and dataset loading errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Linguistic annotation failures (tagging, chunking, date parsing)
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
