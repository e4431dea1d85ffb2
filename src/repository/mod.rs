//! Launch data access
//!
//! Everything that produces [`Launch`] values implements [`LaunchFetcher`]:
//! the remote [`LaunchRepository`] and the decorators that add cross-cutting
//! behaviour around it without changing the result.
//!
//! Decorators take the fetcher they wrap as `Arc<dyn LaunchFetcher>`, so any
//! stacking works. The production chain is
//! `RetryingFetcher -> LoggingFetcher -> LaunchRepository`:
//!
//! ```no_run
//! use launch_tracker::config::Config;
//! use launch_tracker::repository::{LaunchRepository, LoggingFetcher, RetryingFetcher};
//! use launch_tracker::retry::Retrier;
//! use std::sync::Arc;
//!
//! # fn example() -> launch_tracker::Result<()> {
//! let config = Config::default();
//! let base = Arc::new(LaunchRepository::new(&config.upstream)?);
//! let logged = Arc::new(LoggingFetcher::new(base));
//! let fetcher = RetryingFetcher::new(logged, Retrier::new(config.retry));
//! # let _ = fetcher;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::types::{Launch, SearchParams};
use async_trait::async_trait;

mod dto;
mod logging;
mod remote;
mod retrying;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use logging::{FetchMetadata, FetchRecord, LoggingFetcher, RecordSink, TracingSink};
pub use remote::LaunchRepository;
pub use retrying::RetryingFetcher;

/// Fetch launches matching a query
///
/// Implementations return an empty list (not an error) when the query matches
/// nothing but the upstream answered normally.
#[async_trait]
pub trait LaunchFetcher: Send + Sync {
    /// Fetch all launches matching `params`
    async fn get(&self, params: SearchParams) -> Result<Vec<Launch>>;
}
