//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── profile.rs  - Profile retrieval handler
//! └── session.rs  - Logout and token refresh handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - User authentication
//! - **`profile`** - GET /auth/profile - Profile for the current user
//! - **`logout`** - POST /auth/logout - Stateless logout
//! - **`refresh`** - POST /auth/refresh - Issue a fresh token
//!
//! Every handler follows the same validate → lookup → authorize → act →
//! respond shape; each step short-circuits with a specific `ApiError`.

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

/// Logout and refresh handlers
pub mod session;

pub use types::{AuthResponse, LoginRequest, RegisterRequest};

pub use login::login;
pub use profile::profile;
pub use register::register;
pub use session::{logout, refresh};
