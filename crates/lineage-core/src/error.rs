//! Error types for Lineage Core

use thiserror::Error;

/// Result type alias using Lineage's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Lineage error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid identifier: {parameter} passed to {method} is empty")]
    InvalidIdentifier { parameter: String, method: String },

    #[error("Missing type definition for classification: {classification}")]
    MissingTypeDefinition { classification: String },

    #[error("Unsupported property kind '{kind}' for property: {property}")]
    UnsupportedPropertyKind { property: String, kind: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
