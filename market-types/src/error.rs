//! The normalized domain error model.
//!
//! A [`DomainError`] is constructed exactly once, at the moment a storage
//! call fails, and is consumed within the same request. Downstream layers
//! translate by [`ErrorKind`] alone and never re-inspect the message or the
//! cause. The cause is reachable only through [`std::error::Error::source`]
//! for logging; the type deliberately has no `Serialize` impl, so it cannot
//! leak onto any outward-facing wire.

use std::fmt;

/// The stable classification of a failure, independent of storage engine
/// or transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The query matched nothing.
    NotFound,
    /// A referenced parent record does not exist.
    ForeignKeyViolation,
    /// A value collided with an existing record.
    UniqueViolation,
    /// A required column was left null.
    RequiredFieldMissing,
    /// Anything the classifier does not recognize, including deadline expiry.
    Unknown,
}

/// A classified failure with a client-safe message and a retained cause.
#[derive(Debug)]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl DomainError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn foreign_key_violation() -> Self {
        Self::new(
            ErrorKind::ForeignKeyViolation,
            "ensure the referenced record exists",
        )
    }

    pub fn unique_violation() -> Self {
        Self::new(
            ErrorKind::UniqueViolation,
            "a record with this value already exists",
        )
    }

    pub fn required_field_missing() -> Self {
        Self::new(
            ErrorKind::RequiredFieldMissing,
            "ensure all required fields are filled",
        )
    }

    /// For `Unknown` no safer text exists, so the message may echo the
    /// underlying error verbatim.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    /// Attaches the original underlying error, retained for logging only.
    pub fn with_cause(
        mut self,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DomainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}
