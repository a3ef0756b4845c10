//! Retry policy for rate-limited catalog requests
//!
//! Only throttling is retried. AniList signals it either out of band with
//! HTTP 429 or in band through a GraphQL error message.

use regex::Regex;
use reqwest::StatusCode;
use std::sync::OnceLock;
use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Wait before the first retry
    pub initial_delay: Duration,
    /// Factor applied to the wait after every retry
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    /// AniList policy: waits 2s, 4s, 8s, 16s, 32s, then gives up
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(2000),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Multipliers below 1 (or NaN) are treated as 1.
    pub fn new(max_retries: u32, initial_delay: Duration, backoff_multiplier: f64) -> Self {
        let backoff_multiplier = if backoff_multiplier >= 1.0 {
            backoff_multiplier
        } else {
            1.0
        };

        Self {
            max_retries,
            initial_delay,
            backoff_multiplier,
        }
    }

    /// Policy that never retries
    pub fn no_retry() -> Self {
        Self::new(0, Duration::ZERO, 1.0)
    }

    /// Total number of requests a call may send
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay that follows `current` in the backoff sequence
    pub fn next_delay(&self, current: Duration) -> Duration {
        Duration::try_from_secs_f64(current.as_secs_f64() * self.backoff_multiplier)
            .unwrap_or(Duration::MAX)
    }

    /// Full sequence of waits this policy will perform before giving up
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        std::iter::successors(Some(self.initial_delay), move |d| Some(self.next_delay(*d)))
            .take(self.max_retries as usize)
    }
}

/// HTTP statuses that signal throttling
pub fn is_rate_limit_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
}

/// GraphQL error messages that signal throttling.
///
/// Matching English substrings is brittle: an upstream wording change silently
/// turns throttling into a plain upstream error.
pub fn is_rate_limit_message(message: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"(?i)rate limit|too many requests")
                .expect("rate limit pattern is a valid regex")
        })
        .is_match(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.max_attempts(), 6);
        assert_eq!(policy.initial_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_default_delays_double() {
        let delays: Vec<u64> = RetryPolicy::default()
            .delays()
            .map(|d| d.as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![2000, 4000, 8000, 16000, 32000]);
    }

    #[test]
    fn test_no_retry_has_no_delays() {
        let policy = RetryPolicy::no_retry();
        assert_eq!(policy.delays().count(), 0);
        assert_eq!(policy.max_attempts(), 1);
    }

    #[test]
    fn test_multiplier_floor() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100), 0.2);
        assert_eq!(policy.backoff_multiplier, 1.0);
        assert!(policy.delays().all(|d| d == Duration::from_millis(100)));

        let policy = RetryPolicy::new(3, Duration::from_millis(100), f64::NAN);
        assert_eq!(policy.backoff_multiplier, 1.0);
    }

    #[test]
    fn test_next_delay_saturates() {
        let policy = RetryPolicy::new(1, Duration::MAX, 2.0);
        assert_eq!(policy.next_delay(Duration::MAX), Duration::MAX);
    }

    #[test]
    fn test_rate_limit_status() {
        assert!(is_rate_limit_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_rate_limit_status(StatusCode::OK));
        assert!(!is_rate_limit_status(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn test_rate_limit_message_any_case() {
        assert!(is_rate_limit_message("Too Many Requests."));
        assert!(is_rate_limit_message("RATE LIMIT exceeded"));
        assert!(is_rate_limit_message("You have hit the rate limit"));
        assert!(is_rate_limit_message("too many requests"));
        assert!(!is_rate_limit_message("Validation error: invalid MediaSort"));
        assert!(!is_rate_limit_message("ratelimited"));
    }
}
