//! Retry policy for idempotent reads.

use std::time::Duration;

use crate::error::ApiError;

/// How a read is retried.
///
/// Mutations never go through a policy; they get one attempt and the caller
/// decides what to do with the failure. A 401 is never retried regardless of
/// the policy: the credential is gone and repeating the request cannot help.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay schedule between attempts.
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Backoff::Exponential {
                initial: Duration::from_millis(250),
                max: Duration::from_secs(5),
                multiplier: 2.0,
            },
        }
    }
}

impl RetryPolicy {
    /// Default backoff with a custom attempt count.
    pub fn attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// No delay between attempts. Mostly for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::None,
        }
    }

    /// Single attempt; failures return immediately.
    pub fn none() -> Self {
        Self::immediate(1)
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Whether `error` on 0-indexed `attempt` warrants another try.
    pub fn should_retry(&self, attempt: u32, error: &ApiError) -> bool {
        if attempt + 1 >= self.max_attempts {
            return false;
        }
        if matches!(error, ApiError::Unauthorized) {
            return false;
        }
        error.is_retryable()
    }

    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff.delay_for_attempt(attempt)
    }
}

/// Backoff schedule.
#[derive(Debug, Clone)]
pub enum Backoff {
    /// No delay between retries.
    None,
    /// Constant delay between retries.
    Constant(Duration),
    /// Exponential backoff: delay multiplies each attempt.
    Exponential {
        /// Initial delay.
        initial: Duration,
        /// Maximum delay.
        max: Duration,
        /// Multiplier (typically 2.0).
        multiplier: f64,
    },
}

impl Backoff {
    /// Delay before the given 1-indexed retry.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Constant(delay) => *delay,
            Self::Exponential {
                initial,
                max,
                multiplier,
            } => {
                let factor = multiplier.powi(attempt.saturating_sub(1) as i32);
                let millis = (initial.as_millis() as f64 * factor) as u64;
                Duration::from_millis(millis).min(*max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_backoff() {
        let backoff = Backoff::Exponential {
            initial: Duration::from_millis(250),
            max: Duration::from_secs(5),
            multiplier: 2.0,
        };

        assert_eq!(backoff.delay_for_attempt(1), Duration::from_millis(250));
        assert_eq!(backoff.delay_for_attempt(2), Duration::from_millis(500));
        assert_eq!(backoff.delay_for_attempt(3), Duration::from_millis(1000));
        assert_eq!(backoff.delay_for_attempt(10), Duration::from_secs(5));
    }

    #[test]
    fn test_attempt_budget() {
        let policy = RetryPolicy::attempts(3);
        let transient = ApiError::Server { status: 503 };

        assert!(policy.should_retry(0, &transient));
        assert!(policy.should_retry(1, &transient));
        assert!(!policy.should_retry(2, &transient));
    }

    #[test]
    fn test_unauthorized_is_never_retried() {
        let policy = RetryPolicy::attempts(5);
        assert!(!policy.should_retry(0, &ApiError::Unauthorized));
    }

    #[test]
    fn test_verdicts_are_not_retried() {
        let policy = RetryPolicy::default();
        assert!(!policy.should_retry(0, &ApiError::Forbidden));
        assert!(!policy.should_retry(
            0,
            &ApiError::Response {
                status: 404,
                message: "not found".into()
            }
        ));
        assert!(policy.should_retry(0, &ApiError::Timeout));
        assert!(policy.should_retry(0, &ApiError::Network("reset".into())));
    }

    #[test]
    fn test_single_attempt_policy() {
        let policy = RetryPolicy::none();
        assert!(!policy.should_retry(0, &ApiError::Server { status: 500 }));
    }
}
