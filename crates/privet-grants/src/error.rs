//! error types for privet-grants.

use thiserror::Error;

/// errors that can occur while resolving privilege inputs.
///
/// every failure is scoped to the single resolution call that raised it
/// and carries the offending token, name, or id; no partial result is
/// visible to the caller on any error path.
#[derive(Debug, Error)]
pub enum Error {
    /// the action token is not one of the recognized symbolic tokens.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// the subject type token is neither `User` nor `Group`.
    #[error("invalid subject type: {0}")]
    InvalidSubjectType(String),

    /// no application with this name exists in the realm.
    #[error("unknown application: {0}")]
    UnknownApplication(String),

    /// an application references a resource type the catalog does not
    /// know.
    #[error("unknown resource type {resource_type} in realm {realm}")]
    UnknownResourceType {
        /// the resource type id the application referenced.
        resource_type: String,
        /// the realm the lookup ran in.
        realm: String,
    },

    /// a collaborator lookup failed; the underlying error is surfaced
    /// unmodified.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// failure reported by an injected lookup collaborator.
///
/// the directory and catalogs are external services; whatever they
/// report is carried through with the original error kept as the
/// source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl LookupError {
    /// create a lookup error from a bare message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// wrap an underlying error, keeping it as the source.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// result type for privet-grants operations.
pub type Result<T> = std::result::Result<T, Error>;
