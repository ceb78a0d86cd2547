//! Latest-wins scheduling.
//!
//! Each `schedule()` supersedes every ticket issued before it. A delayed task
//! checks `is_current` when it fires and does nothing if it was superseded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Handle for one scheduled application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Version counter shared by every pending task of one logical operation.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes all earlier ones
    pub fn schedule(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Supersede everything without scheduling a replacement
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for Debouncer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.latest, &other.latest)
    }
}
