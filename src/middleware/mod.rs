//! Middleware Module
//!
//! HTTP middleware applied to routes before handlers run.
//!
//! # Architecture
//!
//! Currently a single middleware is provided:
//!
//! - **`auth`** - bearer-token request gate for protected routes

pub mod auth;

pub use auth::{bearer_token, require_auth, AuthenticatedUser, CurrentUser};
