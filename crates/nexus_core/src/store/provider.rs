//! Explicit store slot for hosts and views.
//!
//! # Responsibility
//! - Hold the one `AppStore` of an app session.
//! - Turn access before installation into a typed initialization fault.
//!
//! # Invariants
//! - A provider holds at most one store; installing twice is rejected.
//! - Access never falls back to a default store.

use super::AppStore;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store wiring faults. These indicate host bugs, not runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store accessed before `StoreProvider::install`.
    NotInitialized,
    /// `StoreProvider::install` called while a store is installed.
    AlreadyInitialized,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(
                f,
                "app store accessed before initialization; install a store into the provider first"
            ),
            Self::AlreadyInitialized => write!(f, "app store is already installed in this provider"),
        }
    }
}

impl Error for StoreError {}

/// Session-scoped owner of the app store.
#[derive(Default)]
pub struct StoreProvider {
    store: Option<AppStore>,
}

impl StoreProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider with `store` already installed.
    pub fn with_store(store: AppStore) -> Self {
        Self { store: Some(store) }
    }

    pub fn install(&mut self, store: AppStore) -> StoreResult<()> {
        if self.store.is_some() {
            error!("event=store_install module=store status=error error_code=store_already_initialized");
            return Err(StoreError::AlreadyInitialized);
        }
        self.store = Some(store);
        Ok(())
    }

    pub fn is_installed(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> StoreResult<&AppStore> {
        self.store.as_ref().ok_or_else(not_initialized)
    }

    pub fn store_mut(&mut self) -> StoreResult<&mut AppStore> {
        self.store.as_mut().ok_or_else(not_initialized)
    }

    /// Removes the store at session teardown.
    pub fn take(&mut self) -> Option<AppStore> {
        self.store.take()
    }
}

fn not_initialized() -> StoreError {
    error!("event=store_access module=store status=error error_code=store_not_initialized");
    StoreError::NotInitialized
}
