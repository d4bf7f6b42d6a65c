//! Core error types for aquamind-core.
//!
//! This module defines the error hierarchy using thiserror. Advice
//! generation failures never escape the advice module (they collapse into
//! the fallback message), but the variants live here so the whole taxonomy
//! is visible in one place.

use thiserror::Error;

/// Core error type for aquamind-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistence-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors (rejected mutations)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Persistence-specific errors.
///
/// The key-value collaborator is assumed reliable; these propagate to the
/// caller unhandled rather than being retried.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Data directory could not be resolved or created
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// Read of a persisted blob failed
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Write of a persisted blob failed
    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// A persisted blob exists but does not parse
    #[error("Malformed blob under '{key}': {message}")]
    Corrupted { key: String, message: String },
}

/// Validation errors. A rejected mutation leaves prior state intact.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Intake amount was non-positive or not a finite number
    #[error("Invalid intake amount: {amount} ml (must be positive and finite)")]
    InvalidAmount { amount: f64 },

    /// A settings field failed validation; no partial mutation occurs
    #[error("Invalid settings value for '{field}': {message}")]
    InvalidSettings { field: &'static str, message: String },
}

/// Advice-generation errors.
///
/// Always recovered locally into [`crate::Advice::fallback`]; never
/// surfaced to callers of [`crate::AdviceGenerator::generate`].
#[derive(Error, Debug)]
pub enum AdviceError {
    /// No API key configured for the remote generator
    #[error("Advice API key not configured")]
    MissingApiKey,

    /// Transport-level failure
    #[error("Advice request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status from the remote service
    #[error("Advice service returned HTTP {0}")]
    Status(u16),

    /// Response body did not contain a parsable advice payload
    #[error("Malformed advice response: {0}")]
    Malformed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
