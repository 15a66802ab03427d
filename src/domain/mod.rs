//! Domain layer - Core business entities
//!
//! This module contains the user record and the payload used to
//! create or update it, independent of storage and transport.

pub mod user;

pub use user::{User, UserRequest};
