//! Handler error types

use thiserror::Error;

/// Errors that can occur while registering handlers or reading devices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("Invalid range for output {output:?}: min {min} must be below max {max}")]
    InvalidRange { output: String, min: i32, max: i32 },

    #[error("No handler registered for {kind}/{model}")]
    NoHandler { kind: String, model: String },

    #[error("Handler already registered for {kind}/{model}")]
    DuplicateHandler { kind: String, model: String },
}
