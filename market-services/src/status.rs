//! Translation of domain errors into gRPC statuses.
//!
//! This runs at the server boundary, just before the response is sent.
//! It is the last point where the retained cause is still in hand, so
//! cause logging happens here.

use tonic::Status;

use market_types::{DomainError, ErrorKind};

/// Maps a [`DomainError`] to the status that crosses the RPC boundary.
///
/// Pure mapping over the kind; the message has already been sanitized by
/// the classifier for every recognized kind.
pub fn into_status(err: DomainError) -> Status {
    if let Some(cause) = std::error::Error::source(&err) {
        tracing::error!(error = %err, cause = %cause, "request failed");
    } else {
        tracing::error!(error = %err, "request failed");
    }

    match err.kind() {
        ErrorKind::NotFound => Status::not_found(err.message()),
        ErrorKind::ForeignKeyViolation | ErrorKind::RequiredFieldMissing => {
            Status::invalid_argument(err.message())
        }
        ErrorKind::UniqueViolation => Status::already_exists(err.message()),
        ErrorKind::Unknown => Status::unknown(err.message()),
    }
}
