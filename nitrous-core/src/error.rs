//! Error types for catalog access, query submission and persistence
//!
//! None of these are fatal to a session. The session layer turns each of them
//! into a user-visible notification and leaves its state usable.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load catalog data (categories, module lists, module index)
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The remote could not be reached or the connection failed mid-request
    #[error("Failed to reach catalog API at {url}: {message}")]
    Transport { url: String, message: String },

    /// The remote answered with a non-success HTTP status
    #[error("Catalog API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The payload did not have the expected shape
    #[error("Malformed catalog payload from {source_name}: {reason}")]
    Malformed { source_name: String, reason: String },
}

/// Transport-level failure while sending a query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from [`crate::submit::QuerySubmitter::submit`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Category, module or query text was empty; nothing was sent
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    /// The remote answered but flagged the query as unsuccessful
    #[error("Query failed with status: {status}")]
    HttpStatus { status: u16 },

    /// The remote could not be reached
    #[error("{message}")]
    Transport { message: String },
}

impl From<TransportError> for SubmissionError {
    fn from(err: TransportError) -> Self {
        SubmissionError::Transport {
            message: err.message,
        }
    }
}

/// Failure to write a query result artifact
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to serialize query result")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write query result to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Caller errors against the cascading selector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Module '{module}' is not available for the current category")]
    UnknownModule { module: String },
}
