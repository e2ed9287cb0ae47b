//! Campus domain model shared by every role-specific view.
//!
//! # Responsibility
//! - Define canonical records owned by the application store.
//! - Keep wire naming aligned with the portal front end (camelCase fields,
//!   display-cased enum values).
//!
//! # Invariants
//! - Every record with an `id` keeps it stable for its whole lifetime.
//! - Records generated by the store itself always carry UUID v4 ids.

pub mod catalog;
pub mod classroom;
pub mod meeting;
pub mod navigation;
pub mod notification;
pub mod preference;
pub mod user;

use uuid::Uuid;

/// Stable identifier for store-owned records.
///
/// Kept as a string alias: seed data and imported records use short
/// human-readable ids, generated records use hyphenated UUID v4 text.
pub type EntityId = String;

/// Generates a fresh record id.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}
