//! Authentication Module
//!
//! User registration, login, and stateless JWT session management.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`validation`** - pure input validation (email, password, name)
//! - **`users`** - user model and database operations
//! - **`tokens`** - JWT issuance and verification
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate input → create user → JWT token returned
//! 2. **Login**: validate input → verify credentials and account state →
//!    JWT token returned
//! 3. **Profile/Logout/Refresh**: bearer token verified by the request
//!    gate middleware → handler acts on the attached identity
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 12) before storage
//! - Tokens are stateless and expire after 7 days
//! - Unknown-user and wrong-password logins return identical responses

/// Pure input validation helpers
pub mod validation;

/// User model and database operations
pub mod users;

/// JWT token issuance and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, profile, refresh, register};
pub use tokens::{Claims, TokenError, TokenIssuer};
pub use users::User;
