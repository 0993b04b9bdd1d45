//! The storage error classifier.
//!
//! Converts a raw sqlx error into a [`DomainError`] with a stable kind and
//! a client-safe message. Recognition is driven entirely by the engine's
//! SQLSTATE code; the driver's natural-language text is locale- and
//! version-dependent and is never matched on. The original error is always
//! retained as the cause for logging at the server boundary.

use market_types::DomainError;

/// SQLSTATE: foreign-key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE: unique violation.
const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE: not-null violation.
const NOT_NULL_VIOLATION: &str = "23502";

/// SQLSTATE class 23: integrity constraint violation.
const INTEGRITY_CLASS: &str = "23";

/// Classifies a raw storage error into a [`DomainError`].
///
/// Pure and deterministic: the same error shape always yields the same kind.
pub fn classify(err: sqlx::Error) -> DomainError {
    let classified = match &err {
        sqlx::Error::RowNotFound => DomainError::not_found("record not found"),
        sqlx::Error::Database(db) => {
            let code = db.code().map(|c| c.into_owned());
            classify_code(code.as_deref(), db.message())
        }
        other => DomainError::unknown(other.to_string()),
    };
    classified.with_cause(err)
}

/// The SQLSTATE mapping table, split out so it is testable without
/// fabricating driver error values.
fn classify_code(code: Option<&str>, message: &str) -> DomainError {
    match code {
        Some(FOREIGN_KEY_VIOLATION) => DomainError::foreign_key_violation(),
        Some(UNIQUE_VIOLATION) => DomainError::unique_violation(),
        Some(NOT_NULL_VIOLATION) => DomainError::required_field_missing(),
        // Constraint codes we do not map individually; the code is kept in
        // the message so it survives into the logs.
        Some(c) if c.starts_with(INTEGRITY_CLASS) => {
            DomainError::unknown(format!("unrecognized constraint violation (code {c})"))
        }
        _ => DomainError::unknown(message),
    }
}
