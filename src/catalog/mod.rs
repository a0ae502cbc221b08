//! Catalog Module
//!
//! Products and categories: typed models, database queries, and HTTP
//! handlers.
//!
//! # Module Structure
//!
//! ```text
//! catalog/
//! ├── mod.rs      - Module exports
//! ├── models.rs   - Product and Category records
//! ├── db.rs       - sqlx queries
//! └── handlers.rs - HTTP handlers
//! ```

/// Product and category records
pub mod models;

/// Database queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use models::{Category, Product};
