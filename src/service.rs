//! Launch use cases
//!
//! [`LaunchService`] turns the two questions the API answers ("what launches
//! today?" and "what failed between these instants?") into repository
//! queries. Repository errors are wrapped with use-case context; their
//! classification stays reachable through [`Error::root_cause`].

use crate::error::{Error, Result};
use crate::repository::LaunchFetcher;
use crate::types::{Launch, LaunchStatus, SearchParams};
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use std::sync::Arc;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Current time in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] reading the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Launch queries the REST adapter depends on
#[async_trait]
pub trait LaunchQueries: Send + Sync {
    /// Launches whose NET falls on the current UTC day
    async fn today(&self) -> Result<Vec<Launch>>;

    /// Failed launches with NET between `start` and `end`
    async fn failed(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Launch>>;
}

/// Domain service over a [`LaunchFetcher`]
pub struct LaunchService {
    fetcher: Arc<dyn LaunchFetcher>,
    clock: Arc<dyn Clock>,
}

impl LaunchService {
    /// Create a service using the system clock
    pub fn new(fetcher: Arc<dyn LaunchFetcher>) -> Self {
        Self::with_clock(fetcher, Arc::new(SystemClock))
    }

    /// Create a service with a custom clock
    pub fn with_clock(fetcher: Arc<dyn LaunchFetcher>, clock: Arc<dyn Clock>) -> Self {
        Self { fetcher, clock }
    }
}

/// `[midnight, midnight + 24h)` of the UTC day containing `now`
fn utc_day(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now.date_naive().and_time(NaiveTime::default()).and_utc();
    (start, start + Duration::hours(24))
}

#[async_trait]
impl LaunchQueries for LaunchService {
    async fn today(&self) -> Result<Vec<Launch>> {
        let (start, end) = utc_day(self.clock.now());

        self.fetcher
            .get(SearchParams {
                net_gte: start,
                net_lt: end,
                status: LaunchStatus::Unspecified,
            })
            .await
            .map_err(|e| e.wrap("failed to get todays launches"))
    }

    async fn failed(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Launch>> {
        if end < start {
            return Err(Error::invalid("end date cannot be before start date"));
        }

        self.fetcher
            .get(SearchParams {
                net_gte: start,
                net_lt: end,
                status: LaunchStatus::Failed,
            })
            .await
            .map_err(|e| e.wrap("failed to get failed launches"))
    }
}
