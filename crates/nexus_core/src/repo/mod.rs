//! Repository layer for persisted preferences.
//!
//! # Responsibility
//! - Define the key-value contract preference consumers depend on.
//! - Keep SQL details inside the persistence boundary.

pub mod preference_repo;
