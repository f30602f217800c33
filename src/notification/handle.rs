//! Toast handles

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static TIEBREAK: AtomicU64 = AtomicU64::new(0);

/// Opaque identifier of one toast, used for targeted dismissal.
///
/// Combines the wall-clock millisecond it was issued at with a process-wide
/// counter, so handles issued within the same millisecond still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    issued_ms: i64,
    tiebreak: u64,
}

impl Handle {
    /// Issues a fresh handle
    pub fn next() -> Self {
        Self {
            issued_ms: chrono::Utc::now().timestamp_millis(),
            tiebreak: TIEBREAK.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Rebuilds a handle from its parts
    pub fn from_parts(issued_ms: i64, tiebreak: u64) -> Self {
        Self {
            issued_ms,
            tiebreak,
        }
    }

    pub fn issued_ms(&self) -> i64 {
        self.issued_ms
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.issued_ms, self.tiebreak)
    }
}
