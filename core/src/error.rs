//! Error type for the heroes API client.
//!
//! # Design
//! Every failure collapses into one `TransportFailure`: non-2xx responses,
//! network errors, and bodies that fail to encode or decode. `status` is only
//! set when the server actually answered. `HeroService` never returns this type;
//! it is visible at the `HeroClient` and `Transport` seams only.

use std::fmt;

use thiserror::Error;

/// A failed round-trip to the heroes API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFailure {
    /// HTTP status of the response, or `None` if no response was received.
    pub status: Option<u16>,
    /// Human-readable description, used verbatim in log messages.
    pub message: String,
}

impl TransportFailure {
    /// The server answered with a non-2xx status.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            format!("HTTP {status}: {body}")
        };
        Self {
            status: Some(status),
            message,
        }
    }

    /// The request never produced a response.
    pub fn network(err: impl fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("network error: {err}"),
        }
    }

    /// The response body could not be deserialized into the expected type.
    pub fn decode(err: impl fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("deserialization failed: {err}"),
        }
    }

    /// The request payload could not be serialized to JSON.
    pub fn encode(err: impl fmt::Display) -> Self {
        Self {
            status: None,
            message: format!("serialization failed: {err}"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_body() {
        let err = TransportFailure::from_status(500, "boom\n");
        assert_eq!(err.status, Some(500));
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn status_message_without_body() {
        let err = TransportFailure::from_status(404, "");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn network_failure_has_no_status() {
        let err = TransportFailure::network("connection refused");
        assert_eq!(err.status, None);
        assert!(!err.is_not_found());
        assert_eq!(err.message, "network error: connection refused");
    }
}
