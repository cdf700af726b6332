//! Normalized failure of a backend call.
//!
//! Every transport or HTTP failure is folded into one `ApiError` carrying a
//! human-readable message; the caller branches on `kind` and prints `message`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 4xx other than the ones below: missing or malformed field.
    Validation,
    /// 404: unknown QR token.
    NotFound,
    /// 409: the claim already exists.
    Duplicate,
    /// 401 / 403, or a rejected login.
    Unauthorized,
    /// Connection refused, timeout, unreadable body.
    Network,
    /// 5xx
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Map an HTTP status code to its error kind.
    pub fn kind_for_status(status: u16) -> ApiErrorKind {
        match status {
            401 | 403 => ApiErrorKind::Unauthorized,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Duplicate,
            400..=499 => ApiErrorKind::Validation,
            _ => ApiErrorKind::Server,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    /// 409, or a 4xx whose message says the meal was already taken.
    pub fn is_duplicate(&self) -> bool {
        match self.kind {
            ApiErrorKind::Duplicate => true,
            ApiErrorKind::Validation => mentions_duplicate(&self.message),
            _ => false,
        }
    }
}

/// The backend words duplicates as "... already claimed / consumed".
pub(crate) fn mentions_duplicate(message: &str) -> bool {
    message.to_lowercase().contains("already")
}

