//! Operation counters for the group law.
//!
//! Counters are only incremented when the crate is built with the
//! `profile-op-counts` feature; otherwise they stay at zero and cost nothing
//! on the hot path.

use core::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

/// Per-group tallies of general additions and doublings.
#[derive(Debug, Default)]
pub struct OpCounters {
    add: AtomicU64,
    dbl: AtomicU64,
}

/// Point-in-time copy of an [`OpCounters`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpCountsSnapshot {
    pub add: u64,
    pub dbl: u64,
}

impl OpCounters {
    pub const fn new() -> Self {
        OpCounters {
            add: AtomicU64::new(0),
            dbl: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_add(&self) {
        self.add.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_dbl(&self) {
        self.dbl.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> OpCountsSnapshot {
        OpCountsSnapshot {
            add: self.add.load(Ordering::Relaxed),
            dbl: self.dbl.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.add.store(0, Ordering::Relaxed);
        self.dbl.store(0, Ordering::Relaxed);
    }

    /// Emit the current tallies at `info` level.
    pub fn log_summary(&self, group: &str) {
        let counts = self.snapshot();
        tracing::info!(group, add = counts.add, dbl = counts.dbl, "group operation counts");
    }
}
