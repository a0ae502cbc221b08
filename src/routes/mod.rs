//! Route Configuration Module
//!
//! HTTP route assembly for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly, health check, 404 fallback
//! └── api_routes.rs - Auth and catalog endpoint configuration
//! ```

/// Router assembly
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
