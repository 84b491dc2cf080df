//! Timestamp-derived record identifiers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Hands out ids derived from the current Unix time in milliseconds.
///
/// Two ids minted within the same millisecond would collide, so the
/// generator never returns a value lower than or equal to the previous one.
/// Clones share the same sequence.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: Arc<AtomicU64>,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();

        // The closure always returns Some, so both arms hold the previous value.
        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(previous) | Err(previous) => previous,
        };

        now.max(previous + 1).to_string()
    }
}
