//! Retry decorator

use super::LaunchFetcher;
use crate::error::Result;
use crate::retry::Retrier;
use crate::types::{Launch, SearchParams};
use async_trait::async_trait;
use std::sync::Arc;

/// Retries the wrapped fetcher while it fails with temporary errors
///
/// The outcome is exactly the final attempt's result; errors are never
/// re-classified or wrapped.
pub struct RetryingFetcher {
    inner: Arc<dyn LaunchFetcher>,
    retrier: Retrier,
}

impl RetryingFetcher {
    /// Wrap `inner` with the given retry policy
    pub fn new(inner: Arc<dyn LaunchFetcher>, retrier: Retrier) -> Self {
        Self { inner, retrier }
    }
}

#[async_trait]
impl LaunchFetcher for RetryingFetcher {
    async fn get(&self, params: SearchParams) -> Result<Vec<Launch>> {
        self.retrier
            .run_with_retry(|| self.inner.get(params))
            .await
    }
}
