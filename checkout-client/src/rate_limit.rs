use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    count: u32,
    last_attempt: Instant,
}

/// Per-key attempt counter with a sliding window that fully resets once the
/// window has elapsed since the last allowed attempt. State is process-local
/// and never evicted; limits are per-instance, not shared across processes.
///
/// The whole read-modify-write on an entry happens under one lock
/// acquisition, so concurrent checks on the same key cannot interleave.
#[derive(Clone, Default)]
pub struct AttemptLimiter {
    entries: Arc<Mutex<HashMap<String, RateLimitEntry>>>,
}

impl AttemptLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether another attempt is allowed for `key`. A denied attempt
    /// consumes nothing: neither the count nor the window timestamp moves.
    pub async fn check(&self, key: &str, max_attempts: u32, window: Duration) -> bool {
        let mut guard = self.entries.lock().await;
        let now = Instant::now();
        match guard.get_mut(key) {
            None => {
                guard.insert(
                    key.to_string(),
                    RateLimitEntry {
                        count: 1,
                        last_attempt: now,
                    },
                );
                true
            }
            Some(entry) if now.duration_since(entry.last_attempt) > window => {
                entry.count = 1;
                entry.last_attempt = now;
                true
            }
            Some(entry) if entry.count >= max_attempts => false,
            Some(entry) => {
                entry.count += 1;
                entry.last_attempt = now;
                true
            }
        }
    }

    /// Ceil of the time left in `key`'s current window, in minutes; 0 when the
    /// key is unknown or the window has already elapsed.
    pub async fn remaining_cooldown_minutes(&self, key: &str, window: Duration) -> u64 {
        let guard = self.entries.lock().await;
        let Some(entry) = guard.get(key) else {
            return 0;
        };
        let elapsed = Instant::now().duration_since(entry.last_attempt);
        if elapsed >= window {
            return 0;
        }
        let remaining = window - elapsed;
        let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        (secs + 59) / 60
    }
}
