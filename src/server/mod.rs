//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - AppConfig and environment parsing
//! ├── state.rs  - AppState shared by handlers
//! └── init.rs   - Pool setup, migrations, router assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. `AppConfig::from_env` - fails fast when `JWT_SECRET` or
//!    `DATABASE_URL` is absent
//! 2. `create_app` - connects the pool, runs migrations, builds the router

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError, RunEnv};
pub use init::create_app;
pub use state::AppState;
