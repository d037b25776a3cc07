//! Tagged result of a single panel call.
//!
//! Responsibilities:
//! - Distinguish a panel that answered and refused (`ApiRejected`) from one
//!   that could not be reached or failed server-side (`TransportFailed`).
//! - Give fetch and delete paths one shape to consume.
//!
//! Invariants:
//! - Statuses in `[200, 500)` other than the expected one are `ApiRejected`.
//! - Statuses `>= 500`, connection errors and timeouts are `TransportFailed`;
//!   a server-side failure keeps its status.

use std::fmt;

/// Outcome of one panel call.
#[derive(Debug)]
pub enum CallOutcome<T> {
    /// The panel answered with the expected status.
    Ok(T),
    /// The panel answered with another status below 500.
    ApiRejected { status: u16 },
    /// The call never produced an inspectable response.
    TransportFailed {
        cause: String,
        /// Set when the panel answered with a 5xx status.
        status: Option<u16>,
    },
}

impl<T> CallOutcome<T> {
    /// Whether the call produced the expected response.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Transform the successful value, keeping failures as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallOutcome<U> {
        match self {
            Self::Ok(value) => CallOutcome::Ok(f(value)),
            Self::ApiRejected { status } => CallOutcome::ApiRejected { status },
            Self::TransportFailed { cause, status } => CallOutcome::TransportFailed { cause, status },
        }
    }

    /// Status the panel answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Ok(_) => None,
            Self::ApiRejected { status } => Some(*status),
            Self::TransportFailed { status, .. } => *status,
        }
    }

    pub(crate) fn transport(cause: impl Into<String>) -> Self {
        Self::TransportFailed {
            cause: cause.into(),
            status: None,
        }
    }

    /// Human-readable description of a failed call, `None` on success.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Self::Ok(_) => None,
            Self::ApiRejected { status } => Some(format!("API returned status {}", status)),
            Self::TransportFailed { cause, .. } => Some(cause.clone()),
        }
    }

    /// Convert into a `Result`, building the error from the failure message and status.
    pub fn into_result<E>(self, on_failure: impl FnOnce(String, Option<u16>) -> E) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::ApiRejected { status } => Err(on_failure(
                format!("API returned status {}", status),
                Some(status),
            )),
            Self::TransportFailed { cause, status } => Err(on_failure(cause, status)),
        }
    }
}

impl<T> fmt::Display for CallOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failure_message() {
            None => write!(f, "ok"),
            Some(message) => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_names_status() {
        let outcome: CallOutcome<()> = CallOutcome::ApiRejected { status: 404 };
        assert_eq!(outcome.failure_message().as_deref(), Some("API returned status 404"));
        assert_eq!(outcome.status(), Some(404));
        assert!(!outcome.is_ok());
    }

    #[test]
    fn test_transport_failure_keeps_cause() {
        let outcome: CallOutcome<()> = CallOutcome::transport("connection refused");
        assert_eq!(outcome.to_string(), "connection refused");
        assert_eq!(outcome.status(), None);
    }

    #[test]
    fn test_server_error_keeps_status() {
        let outcome: CallOutcome<()> = CallOutcome::TransportFailed {
            cause: "Panel returned server error status 503".into(),
            status: Some(503),
        };
        assert_eq!(outcome.status(), Some(503));
        let err = outcome.into_result(|m, s| (m, s)).unwrap_err();
        assert_eq!(
            err,
            ("Panel returned server error status 503".to_string(), Some(503))
        );
    }

    #[test]
    fn test_into_result() {
        let ok: CallOutcome<u8> = CallOutcome::Ok(7);
        assert_eq!(ok.map(|v| v * 2).into_result(|m, _| m).unwrap(), 14);

        let rejected: CallOutcome<u8> = CallOutcome::ApiRejected { status: 401 };
        let err = rejected.into_result(|m, s| (m, s)).unwrap_err();
        assert_eq!(err, ("API returned status 401".to_string(), Some(401)));
    }
}
