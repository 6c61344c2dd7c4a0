use std::time::Duration;

/// Retry budget for HTTP 429 responses.
///
/// The n-th retry waits `n × backoff_step`, so with the defaults (20 retries,
/// 2 s step) a call that is throttled throughout sleeps 2+4+…+40 = 420 s in
/// total before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_retries: u32,
    pub backoff_step: Duration,
}

pub const DEFAULT_MAX_RETRIES: u32 = 20;
pub const DEFAULT_BACKOFF_STEP: Duration = Duration::from_secs(2);

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_step: DEFAULT_BACKOFF_STEP,
        }
    }
}

impl RateLimitPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff_step(mut self, step: Duration) -> Self {
        self.backoff_step = step;
        self
    }

    /// Never retry; the first 429 is final.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            backoff_step: Duration::ZERO,
        }
    }

    /// Delay before the next attempt, given how many retries were already
    /// made, or `None` once the budget is spent.
    pub fn next_backoff(&self, retries_so_far: u32) -> Option<Duration> {
        if retries_so_far >= self.max_retries {
            return None;
        }
        Some(self.backoff_step.saturating_mul(retries_so_far + 1))
    }

    /// Sum of every backoff the policy can impose.
    pub fn total_backoff(&self) -> Duration {
        (0..self.max_retries)
            .filter_map(|n| self.next_backoff(n))
            .fold(Duration::ZERO, |acc, d| acc.saturating_add(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_backoff() {
        let policy = RateLimitPolicy::default();
        assert_eq!(policy.next_backoff(0), Some(Duration::from_secs(2)));
        assert_eq!(policy.next_backoff(1), Some(Duration::from_secs(4)));
        assert_eq!(policy.next_backoff(19), Some(Duration::from_secs(40)));
        assert_eq!(policy.next_backoff(20), None);
    }

    #[test]
    fn test_total_backoff() {
        assert_eq!(
            RateLimitPolicy::default().total_backoff(),
            Duration::from_secs(420)
        );
        assert_eq!(RateLimitPolicy::disabled().total_backoff(), Duration::ZERO);
    }

    #[test]
    fn test_builder() {
        let policy = RateLimitPolicy::new()
            .with_max_retries(3)
            .with_backoff_step(Duration::from_millis(10));
        assert_eq!(policy.next_backoff(2), Some(Duration::from_millis(30)));
        assert_eq!(policy.next_backoff(3), None);
    }
}
