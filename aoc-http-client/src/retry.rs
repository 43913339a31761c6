//! Bounded retry for requests that may fail until a puzzle unlocks

use crate::error::AocError;
use std::time::Duration;

/// How many times to try a request and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one (at least 1)
    pub attempts: u32,
    /// Pause after each failed attempt
    pub backoff: Duration,
}

impl RetryPolicy {
    /// A policy that tries exactly once
    pub const fn no_retry() -> Self {
        Self {
            attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    /// Run `op` until it succeeds, fails with a non-transient error, or the
    /// attempts run out.
    ///
    /// The error returned after the last attempt is wrapped in
    /// [`AocError::RetriesExhausted`].
    pub fn run<T>(&self, mut op: impl FnMut() -> Result<T, AocError>) -> Result<T, AocError> {
        let attempts = self.attempts.max(1);
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) if attempt >= attempts => {
                    return Err(AocError::RetriesExhausted {
                        attempts,
                        last: Box::new(e),
                    });
                }
                Err(e) => {
                    tracing::warn!(attempt, max_attempts = attempts, error = %e, "not ready yet");
                    if !self.backoff.is_zero() {
                        std::thread::sleep(self.backoff);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    /// Five attempts, one second apart
    fn default() -> Self {
        Self {
            attempts: 5,
            backoff: Duration::from_secs(1),
        }
    }
}
