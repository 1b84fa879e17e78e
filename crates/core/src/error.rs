//! Error types for the shape algebra
//!
//! There is exactly one error condition in this crate family: a field-name
//! collision detected by the guard operator. It is carried as data and
//! inspected by the caller at the use site; nothing here panics or throws.
//! We use `thiserror` for the `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for shape operations
pub type Result<T> = std::result::Result<T, CollisionError>;

/// Diagnostic produced when two shapes share a field name
///
/// The message wording is part of the public contract: it is surfaced
/// verbatim to framework users as a build-time diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The property '{field}' in your router collides with a built-in method, rename this router or procedure on your backend.")]
pub struct CollisionError {
    /// The colliding field name
    pub field: String,
}

impl CollisionError {
    /// Create a diagnostic for the given field name
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}
