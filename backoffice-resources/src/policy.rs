//! Per-resource fetch policy

use std::time::Duration;

use backoffice_http::RetryPolicy;

/// Staleness and retry policy for one resource, spelled out explicitly
/// rather than implied by a cache library.
///
/// Reads run under `retry` (three attempts by default, never retrying 401);
/// a cached entry older than `stale_after` is served immediately while a
/// background refresh runs.
#[derive(Debug, Clone)]
pub struct ResourcePolicy {
    pub stale_after: Duration,
    pub retry: RetryPolicy,
}

impl Default for ResourcePolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl ResourcePolicy {
    pub fn stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_staleness_is_tens_of_seconds() {
        let policy = ResourcePolicy::default();
        assert_eq!(policy.stale_after, Duration::from_secs(30));
        assert_eq!(policy.retry.max_attempts, 3);
    }
}
