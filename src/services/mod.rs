//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate the store and the cache to fulfill the user
//! operations. They depend on abstractions (traits) for dependency
//! inversion.

mod admin_service;
pub mod container;
mod user_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use admin_service::{AdminManager, AdminService};
pub use user_service::{UserManager, UserService};
