/// Retry-with-backoff shared by every outbound catalog request.
///
/// The loop itself is generic over the backoff function so callers can plug in
/// any schedule; `RetryPolicy` supplies the exponential one used by default.
use std::future::Future;
use std::time::Duration;

/// Exponential retry configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Delay after the first failure; doubles on every further failure
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay after the given failed attempt (0-indexed): `base * 2^attempt`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let multiplier = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(multiplier)
            .unwrap_or(Duration::MAX)
    }

    /// Runs `operation` under this policy
    pub async fn run<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        retry_with_backoff(self.max_attempts, |attempt| self.delay_for_attempt(attempt), operation)
            .await
    }
}

/// Execute an async operation up to `max_attempts` times.
///
/// The `operation` closure receives the current attempt number (0-indexed).
/// After every failure except the last, the loop sleeps for `backoff(attempt)`.
/// Returns the first success or the error from the final attempt.
pub async fn retry_with_backoff<F, Fut, T, E, B>(
    max_attempts: u32,
    backoff: B,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    B: Fn(u32) -> Duration,
    E: std::fmt::Display,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt + 1 >= max_attempts {
                    tracing::warn!(
                        attempts = max_attempts,
                        error = %err,
                        "Retries exhausted"
                    );
                    return Err(err);
                }

                let delay = backoff(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max = max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
