//! Retry logic with linear backoff
//!
//! [`Retrier`] re-invokes a fallible operation while its failures are
//! classified as temporary (see [`Classify::is_temporary`]), up to
//! [`RetryConfig::max_attempts`] invocations in total. Before retry `n` it
//! waits `n * base_delay`. No wait happens after the final attempt, and the
//! error handed back is exactly the one produced by the last invocation.
//!
//! Waiting goes through an injected [`Sleeper`] so tests can observe the
//! backoff schedule without real delays.
//!
//! # Example
//!
//! ```no_run
//! use launch_tracker::retry::Retrier;
//! use launch_tracker::error::Error;
//!
//! # async fn example() -> Result<(), Error> {
//! let retrier = Retrier::default();
//! let value = retrier
//!     .run_with_retry(|| async { Ok::<_, Error>(42) })
//!     .await?;
//! assert_eq!(value, 42);
//! # Ok(())
//! # }
//! ```

use crate::config::RetryConfig;
use crate::error::Classify;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Something that can wait for a duration
///
/// Production code uses [`TokioSleeper`]. Cancellation is not supported: a
/// started sleep always runs to completion.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retries operations whose failures are classified temporary
#[derive(Clone)]
pub struct Retrier {
    config: RetryConfig,
    sleeper: Arc<dyn Sleeper>,
}

impl Default for Retrier {
    /// [`RetryConfig::DEFAULT`] with a real tokio sleeper
    fn default() -> Self {
        Self::new(RetryConfig::DEFAULT)
    }
}

impl std::fmt::Debug for Retrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retrier")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Retrier {
    /// Create a retrier that sleeps with [`TokioSleeper`]
    pub fn new(config: RetryConfig) -> Self {
        Self::with_sleeper(config, Arc::new(TokioSleeper))
    }

    /// Create a retrier with a custom [`Sleeper`]
    ///
    /// A `max_attempts` of zero is treated as one: the operation always runs
    /// at least once.
    pub fn with_sleeper(config: RetryConfig, sleeper: Arc<dyn Sleeper>) -> Self {
        Self { config, sleeper }
    }

    /// The policy this retrier applies
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `operation`, retrying while it fails with a temporary error
    ///
    /// # Returns
    ///
    /// The first success, or the unmodified error of the last invocation.
    pub async fn run_with_retry<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Classify + std::fmt::Display,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt: u32 = 1;

        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!(attempts = attempt, "Operation succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) if e.is_temporary() && attempt < max_attempts => {
                    let delay = self.config.base_delay * attempt;

                    tracing::warn!(
                        error = %e,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Temporary failure, retrying"
                    );

                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    if e.is_temporary() {
                        tracing::error!(
                            error = %e,
                            attempts = attempt,
                            "Operation failed after all retry attempts exhausted"
                        );
                    } else {
                        tracing::debug!(
                            error = %e,
                            attempt = attempt,
                            "Operation failed with non-temporary error"
                        );
                    }
                    return Err(e);
                }
            }
        }
    }
}
