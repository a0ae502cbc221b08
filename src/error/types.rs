/**
 * API Error Types
 *
 * This module defines the error types returned by HTTP handlers.
 * Each variant carries the client-facing message; the mapping to an HTTP
 * status code lives in `status_code`.
 *
 * # Enumeration Resistance
 *
 * `InvalidCredentials` is deliberately a single variant covering both
 * "no such user" and "wrong password". Both failure causes produce the
 * identical 401 response so an attacker cannot learn which emails are
 * registered.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by HTTP handlers and the request gate.
///
/// Variants that carry a `String` use it verbatim as the response message.
/// `Internal` keeps the underlying detail separately so it can be echoed in
/// development builds while staying out of production responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request input
    #[error("{0}")]
    Validation(String),

    /// Resource already exists (duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Unknown user or wrong password; one message for both causes
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account carries a soft-delete timestamp
    #[error("Account has been deactivated")]
    AccountDeactivated,

    /// Account ban-expiry lies in the future
    #[error("Account is temporarily suspended")]
    AccountSuspended,

    /// No bearer token on a protected route
    #[error("Access token is required")]
    MissingToken,

    /// Token signature is valid but the expiry has passed
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature or format is malformed
    #[error("Invalid token")]
    TokenInvalid,

    /// Refresh requested for a deleted, banned, or vanished account
    #[error("User account is no longer active")]
    InactiveAccount,

    /// Unknown resource id
    #[error("{0}")]
    NotFound(String),

    /// Datastore or crypto failure; detail is logged, not sent
    #[error("{message}")]
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl ApiError {
    /// Create an internal error from any underlying failure.
    ///
    /// The cause is logged server-side; the client sees a generic message.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", err);
        Self::Internal {
            message: "Internal server error".to_string(),
            detail: None,
        }
    }

    /// Create an internal error that echoes the underlying detail when
    /// `expose` is set (development environments only).
    pub fn internal_exposed(err: impl std::fmt::Display, expose: bool) -> Self {
        tracing::error!("Internal error: {}", err);
        Self::Internal {
            message: "Internal Server Error".to_string(),
            detail: expose.then(|| err.to_string()),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials
            | Self::AccountDeactivated
            | Self::MissingToken
            | Self::TokenExpired
            | Self::InactiveAccount => StatusCode::UNAUTHORIZED,
            Self::AccountSuspended | Self::TokenInvalid => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
