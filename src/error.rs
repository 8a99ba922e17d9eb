//! Error types for traversal operations.

use thiserror::Error;

use crate::dispatch::HandlerKey;

/// Result alias used by handlers and the traversal engine.
pub type Result<T> = std::result::Result<T, VisitError>;

/// Errors that can surface from a call to an accept entry point.
///
/// A missing handler is never an error; it resolves to a no-op.
#[derive(Debug, Error)]
pub enum VisitError {
    /// A composite handed the engine a child collection it cannot walk.
    #[error("Invalid child descriptor #{index} on {type_name}: {reason}")]
    InvalidDescriptor {
        type_name: &'static str,
        index: usize,
        reason: &'static str,
    },

    /// A handler rejected the node it was given.
    #[error("Handler {key} failed: {message}")]
    Handler { key: HandlerKey, message: String },

    /// Any other failure raised from inside a handler.
    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl VisitError {
    /// Create an invalid descriptor error.
    pub fn invalid_descriptor(type_name: &'static str, index: usize, reason: &'static str) -> Self {
        Self::InvalidDescriptor {
            type_name,
            index,
            reason,
        }
    }

    /// Create a handler error.
    pub fn handler(key: HandlerKey, message: impl Into<String>) -> Self {
        Self::Handler {
            key,
            message: message.into(),
        }
    }

    /// Wrap an arbitrary error raised by a handler.
    pub fn custom(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(error))
    }
}
