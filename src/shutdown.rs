//! Process-wide cancellation flag set by the ctrlc handler.
//!
//! The resolver checks this (through the cancel predicate) between entries,
//! so an interrupted pass stops cleanly at an entry boundary: entries
//! already relinked keep their new state, the rest are left untouched.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag.

use std::sync::atomic::{AtomicBool, Ordering};

static CANCELLED: AtomicBool = AtomicBool::new(false);

/// Request a cooperative cancellation (idempotent; signal-handler safe).
#[inline]
pub fn request() {
    CANCELLED.store(true, Ordering::Relaxed);
}

/// Check whether cancellation has been requested.
#[inline]
pub fn is_requested() -> bool {
    CANCELLED.load(Ordering::Relaxed)
}
