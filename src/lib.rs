//! Storefront - Main Library
//!
//! Storefront is a small e-commerce backend: user registration and login
//! with stateless JWT sessions, plus CRUD endpoints for products and
//! categories backed by PostgreSQL.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - configuration loading, shared state, initialization
//! - **`routes`** - router assembly and endpoint configuration
//! - **`auth`** - validation, user storage, JWT tokens, auth handlers
//! - **`middleware`** - bearer-token request gate for protected routes
//! - **`catalog`** - product and category models, queries, handlers
//! - **`error`** - the `ApiError` taxonomy and HTTP conversions
//!
//! # Request Flow
//!
//! Inbound request → request gate (protected routes only) → handler →
//! validation + database + token issuance → JSON response. Each request is
//! handled by one task; the database, bcrypt, and JWT steps run
//! sequentially within it.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Product catalog
pub mod catalog;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
