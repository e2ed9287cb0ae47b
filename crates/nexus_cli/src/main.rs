//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nexus_core` linkage.
//! - Run one office-hour approval against the demo store and print counts.
//! - Write the core's diagnostics under the system temp directory.

use nexus_core::{default_log_level, demo_store, init_logging, StoreConfig, SystemClock, UserRole};
use std::path::PathBuf;
use std::sync::Arc;

const LOG_DIR_NAME: &str = "nexus-cli-logs";

fn main() {
    let log_dir = cli_log_dir();
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("log_dir={}", log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    println!("nexus_core ping={}", nexus_core::ping());
    println!("nexus_core version={}", nexus_core::core_version());

    let mut store = demo_store(StoreConfig::default(), Arc::new(SystemClock));
    store.approve_office_hour("s1");

    println!("meetings={}", store.meetings().len());
    println!("notifications={}", store.notifications().len());
    println!(
        "student_unread={}",
        store.unread_count(Some(UserRole::Student))
    );
    println!("toasts={}", store.toasts().len());
}

/// Absolute log directory; logging rejects relative paths.
fn cli_log_dir() -> PathBuf {
    let base = std::env::temp_dir();
    let base = if base.is_absolute() {
        base
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&base))
            .unwrap_or(base)
    };
    base.join(LOG_DIR_NAME)
}
