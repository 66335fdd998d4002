//! # Engine Errors
//!
//! Error types for session and backend operations.

use crate::entity::{Dim, Tag};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving the external mesher.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A model operation was issued before `add_model`.
    #[error("No active model: call add_model first")]
    NoActiveModel,

    /// An entity tag is already taken in its dimension.
    #[error("Duplicate {dim}-dimensional entity tag {tag}")]
    DuplicateTag { dim: Dim, tag: Tag },

    /// A referenced entity was never created in this model.
    #[error("Unknown {dim}-dimensional entity tag {tag}")]
    UnknownEntity { dim: Dim, tag: Tag },

    /// A field setting targets a field that was never added.
    #[error("Unknown field {0}")]
    UnknownField(Tag),

    /// Option lookup failed.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Option holds a value of another type.
    #[error("Option {name} is not a {expected}")]
    OptionType { name: String, expected: &'static str },

    /// Malformed engine argument list.
    #[error("Invalid engine argument: {0}")]
    InvalidArgument(String),

    /// Operation received an empty or invalid entity list.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The mesher executable could not be started.
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The mesher ran but reported failure.
    #[error("Mesher failed (status {status:?}): {message}")]
    Process { status: Option<i32>, message: String },

    /// The mesher reported success but left no output behind.
    #[error("Mesher produced no output at {0}")]
    MissingOutput(PathBuf),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// TESTS
// =============================================================================
