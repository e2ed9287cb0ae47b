//! Sign-in, sign-up and sign-out flows over an external auth provider.
//!
//! # Responsibility
//! - Define the auth provider contract the host implements.
//! - Turn provider results into session users and user-facing toasts.
//!
//! # Invariants
//! - The store is mutated only after the provider call returns.
//! - Provider failures never change the session user.

pub mod auth;
pub mod service;
