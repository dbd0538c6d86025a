//! Common error types used across the workspace.
//!
//! Repository and verdict-provider calls are total, so the only failures are
//! caller contract violations, caught before any state is touched.

/// Top-level error for catpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum CatpointError {
    /// Input failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The referenced item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A sensor was given an empty name.
    #[error("name must not be empty")]
    EmptyName,

    /// An image with no content was submitted for classification.
    #[error("image must not be empty")]
    EmptyImage,

    /// An identifier could not be parsed.
    #[error("invalid identifier {value:?}")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },
}

/// Lookup of an unknown item.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of item that was looked up (e.g. `"Sensor"`).
    pub entity: &'static str,
    /// String form of the identifier that was not found.
    pub id: String,
}
