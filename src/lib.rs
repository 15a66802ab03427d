//! User Cache Service - user records with a read-through cache
//!
//! Users live in Postgres; single-user lookups are served from a
//! key-value cache (Redis, or an in-process map) that is populated on
//! read, refreshed on update when already hot, and evicted on delete.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The user record and its validated request payload
//! - **services**: Cache policy around the user store, admin operations
//! - **infra**: Database, repository and cache adapters
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against Redis
//! cargo run -- serve
//!
//! # Start the server with the in-process cache
//! cargo run -- serve --cache memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserRequest};
pub use errors::{AppError, AppResult};
pub use infra::{CacheStore, MemoryCache};
