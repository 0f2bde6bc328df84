//! Process-wide network stack lifetime.
//!
//! Some platforms need global setup before the first connection (a socket
//! library, a TLS crypto provider). The runtime keeps a count of live users:
//! the first [`initialize`] performs the setup, the last [`shutdown`] logs the
//! teardown, and surplus calls on either side are harmless.
//!
//! Clients do not call these directly; each one holds a [`RuntimeGuard`]
//! obtained from [`acquire`] for as long as it lives.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::log::info;

static USERS: AtomicUsize = AtomicUsize::new(0);

/// Registers a user of the network stack, initializing it on first use.
///
/// Initialization is idempotent: if another caller raced past the zero check
/// or a provider is already installed, nothing breaks.
pub fn initialize() {
    if USERS.fetch_add(1, Ordering::AcqRel) == 0 {
        init_global();
        info!("network runtime initialized");
    }
}

/// Releases one user of the network stack. Calling it with no users left is
/// a no-op.
pub fn shutdown() {
    let prev = USERS.fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    if prev == Ok(1) {
        info!("network runtime shut down");
    }
}

/// Number of live users.
pub fn users() -> usize {
    USERS.load(Ordering::Acquire)
}

/// Scoped registration returned by [`acquire`]; dropping it calls
/// [`shutdown`].
#[derive(Debug)]
#[must_use = "the runtime is released as soon as the guard is dropped"]
pub struct RuntimeGuard {
    _private: (),
}

/// Calls [`initialize`] and returns a guard that undoes it on drop.
pub fn acquire() -> RuntimeGuard {
    initialize();
    RuntimeGuard { _private: () }
}

impl Drop for RuntimeGuard {
    fn drop(&mut self) {
        shutdown();
    }
}

#[cfg(feature = "std")]
fn init_global() {
    // Err means a process default exists already, which is just as good.
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        crate::log::debug!("crypto provider already installed");
    }
}

#[cfg(not(feature = "std"))]
fn init_global() {}
