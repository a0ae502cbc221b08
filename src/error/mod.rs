//! API Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers.
//! Every failure a handler can produce maps to exactly one `ApiError`
//! variant, and every variant maps to exactly one HTTP status code.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Error Categories
//!
//! - `Validation` - malformed or missing input (400)
//! - `Conflict` - duplicate email on registration (409)
//! - `InvalidCredentials` / `AccountDeactivated` / `AccountSuspended` -
//!   authentication failures (401/403)
//! - `MissingToken` / `TokenExpired` / `TokenInvalid` - request gate
//!   failures (401/403)
//! - `NotFound` - unknown resource id (404)
//! - `Internal` - datastore/crypto failure (500); the underlying detail is
//!   logged server-side and never reaches the client in the auth flow

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
