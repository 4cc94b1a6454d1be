//! Error types for the HGI engine
//!
//! This module defines the error types shared by the core API and every
//! backend: record-time argument errors, shader compile failures, device
//! failures surfaced by a commit and contract violations.

use std::fmt;

/// Result type for HGI operations
pub type Result<T> = std::result::Result<T, Error>;

/// HGI errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend-specific error reported by a device call
    BackendError(String),

    /// Invalid resource (unknown or already destroyed handle)
    InvalidResource(String),

    /// Malformed input rejected at record time
    InvalidArgument(String),

    /// Shader function or program failed to compile/link
    CompileFailure(String),

    /// A committed op's device call failed; the rest of the batch was dropped
    DeviceExecutionFailure(String),

    /// Programming-contract violation (re-entrant commit, recording while committing)
    Misuse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::CompileFailure(msg) => write!(f, "Compile failure: {}", msg),
            Error::DeviceExecutionFailure(msg) => write!(f, "Device execution failure: {}", msg),
            Error::Misuse(msg) => write!(f, "Misuse: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
