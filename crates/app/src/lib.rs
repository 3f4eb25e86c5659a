//! # rangedeck-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - [`ports::DeviceLink`] — read status / send motor commands
//!   - [`ports::PanelView`] — the view-binding interface the panel renders through
//! - Provide the use-cases:
//!   - [`controller::PanelController`] — poll-tick handling and command dispatch
//!   - [`notifier::Notifier`] — self-expiring status-banner notices
//!   - [`poller::spawn_status_poller`] — cancellable fixed-cadence polling
//!   - [`startup::run_boot_sequence`] — one-shot loading-cover sequence
//! - Orchestrate domain values without knowing *how* transport or rendering work
//!
//! ## Dependency rule
//! Depends on `rangedeck-domain` only (plus `tokio` for scheduling).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod controller;
pub mod notifier;
pub mod poller;
pub mod ports;
pub mod startup;
pub mod timing;

/// Lock a mutex, recovering the guard when a panicking holder poisoned it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
