//! Derivation services behind the store facade.
//!
//! # Responsibility
//! - Decide secondary effects (notifications, toasts, cascaded meetings) of
//!   each mutation.
//! - Build read-side projections (calendar, search) over store collections.
//! - Load and persist the display theme through the preference repository.
//!
//! # Invariants
//! - Services never own entity collections; the store applies what they
//!   return.

pub mod calendar;
pub mod notification_deriver;
pub mod office_hours;
pub mod search;
pub mod theme;
pub mod toast_emitter;
