//! Per-user rate limiting with a fixed minimum interval between events.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    Allowed,
    /// Denied, with the remaining wait until the next accepted event.
    Denied { retry_after_secs: f64 },
}

/// Tracks the last accepted event per user.
///
/// A denied event does NOT update the window, so a user hammering the bot
/// still gets admitted `min_interval` after their last ACCEPTED event.
pub struct RateLimiter {
    min_interval: Duration,
    windows: Mutex<HashMap<i64, Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval_secs: f64) -> Self {
        Self {
            min_interval: Duration::from_secs_f64(min_interval_secs),
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or deny an event from `user_id`.
    ///
    /// `privileged` callers bypass the limiter entirely and do not touch
    /// their window.
    pub async fn admit(&self, user_id: i64, privileged: bool) -> Admission {
        if privileged {
            return Admission::Allowed;
        }

        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        if let Some(last) = windows.get(&user_id) {
            let elapsed = now.duration_since(*last);
            if elapsed < self.min_interval {
                let remaining = self.min_interval - elapsed;
                return Admission::Denied {
                    retry_after_secs: remaining.as_secs_f64(),
                };
            }
        }
        windows.insert(user_id, now);
        Admission::Allowed
    }

    /// Forget a user's window. Returns whether one existed.
    pub async fn reset(&self, user_id: i64) -> bool {
        self.windows.lock().await.remove(&user_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_event_allowed() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
    }

    #[tokio::test]
    async fn test_rapid_second_event_denied_with_remaining() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
        match limiter.admit(1, false).await {
            Admission::Denied { retry_after_secs } => {
                assert!(retry_after_secs > 0.0 && retry_after_secs <= 2.0);
            }
            Admission::Allowed => panic!("second immediate event should be denied"),
        }
    }

    #[tokio::test]
    async fn test_denied_event_does_not_extend_window() {
        let limiter = RateLimiter::new(0.1);
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
        // Hammer during the window; none of these should push the window out.
        for _ in 0..5 {
            let _ = limiter.admit(1, false).await;
        }
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
    }

    #[tokio::test]
    async fn test_privileged_bypasses_and_leaves_window_untouched() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.admit(1, true).await, Admission::Allowed);
        assert_eq!(limiter.admit(1, true).await, Admission::Allowed);
        // The bypassed calls never started a window for this user.
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
        assert_eq!(limiter.admit(2, false).await, Admission::Allowed);
    }

    #[tokio::test]
    async fn test_reset_clears_window() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
        assert!(limiter.reset(1).await);
        assert!(!limiter.reset(1).await);
        assert_eq!(limiter.admit(1, false).await, Admission::Allowed);
    }
}
