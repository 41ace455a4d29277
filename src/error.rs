//! Error types for pipeline assembly

use std::ffi::NulError;
use thiserror::Error;

/// Errors raised while assembling a pipeline.
///
/// Only the builder surface returns these. Once a pipeline is executing,
/// failures are latched into [`ProcessState::Error`](crate::ProcessState)
/// and read back through state queries instead.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// A command must carry at least a program name.
    #[error("command must have at least one argument")]
    EmptyCommand,

    /// Arguments and paths cross the exec boundary as C strings.
    #[error("argument contains an interior NUL byte: {0}")]
    NulByte(#[from] NulError),
}

/// Result type for pipeline assembly operations
pub type Result<T> = std::result::Result<T, ProcessError>;
