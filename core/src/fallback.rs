//! Uniform "swallow and report" failure handling.

use std::future::Future;

use crate::error::TransportFailure;

/// Await `operation`; on failure, report it and resolve to `fallback`.
///
/// A failure is recorded as a `tracing` error event and passed to `log` as
/// `"{name} failed: {message}"`. The caller never sees the error, so
/// "not found", network failures and server errors are indistinguishable
/// from the outside.
pub async fn with_fallback<T, F, L>(name: &str, operation: F, fallback: T, log: L) -> T
where
    F: Future<Output = Result<T, TransportFailure>>,
    L: FnOnce(&str),
{
    match operation.await {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(operation = name, status = ?err.status, error = %err, "request failed");
            log(&format!("{name} failed: {}", err.message));
            fallback
        }
    }
}
