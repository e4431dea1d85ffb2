//! # launch-tracker
//!
//! Read-only REST service answering two questions about rocket launches,
//! backed by the Launch Library API:
//!
//! - `GET /today` - launches whose NET falls on the current UTC day
//! - `GET /failed?start=..&end=..` - failed launches in a date range
//!
//! ## Architecture
//!
//! ```text
//! api (axum) -> LaunchService -> RetryingFetcher -> LoggingFetcher -> LaunchRepository -> upstream
//! ```
//!
//! Failures carry a classification (missing, temporary, unauthorized,
//! invalid). The retry decorator re-runs temporary failures, and the API maps
//! classifications to status codes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use launch_tracker::{Config, LaunchRepository, LaunchService, LoggingFetcher, Retrier, RetryingFetcher};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::default());
//!
//!     let repository = Arc::new(LaunchRepository::new(&config.upstream)?);
//!     let logged = Arc::new(LoggingFetcher::new(repository));
//!     let retrying = Arc::new(RetryingFetcher::new(logged, Retrier::new(config.retry)));
//!     let service = Arc::new(LaunchService::new(retrying));
//!
//!     launch_tracker::api::start_api_server(service, config, launch_tracker::shutdown_signal()).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Error types and failure classification
pub mod error;
/// Launch data access and fetcher decorators
pub mod repository;
/// Retry logic with linear backoff
pub mod retry;
/// Launch use cases
pub mod service;
/// Core domain types
pub mod types;

// Re-export commonly used types
pub use config::{Config, RetryConfig, ServerConfig, UpstreamConfig};
pub use error::{Classify, Error, ErrorKind, Result, ToHttpStatus};
pub use repository::{LaunchFetcher, LaunchRepository, LoggingFetcher, RetryingFetcher};
pub use retry::{Retrier, Sleeper, TokioSleeper};
pub use service::{Clock, LaunchQueries, LaunchService, SystemClock};
pub use types::{Launch, LaunchStatus, SearchParams};

/// Shutdown future for [`api::start_api_server`]
///
/// Completes on SIGTERM or SIGINT, after which the server stops accepting
/// connections and drains in-flight launch queries. If neither handler can be
/// installed it falls back to `ctrl_c`.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{Signal, SignalKind, signal};

    async fn recv(signal: Option<Signal>) {
        match signal {
            Some(mut s) => {
                s.recv().await;
            }
            None => std::future::pending().await,
        }
    }

    let terminate = signal(SignalKind::terminate())
        .inspect_err(|e| tracing::warn!(error = %e, "SIGTERM handler unavailable"))
        .ok();
    let interrupt = signal(SignalKind::interrupt())
        .inspect_err(|e| tracing::warn!(error = %e, "SIGINT handler unavailable"))
        .ok();

    if terminate.is_none() && interrupt.is_none() {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown requested");
        return;
    }

    let name = tokio::select! {
        _ = recv(terminate) => "SIGTERM",
        _ = recv(interrupt) => "SIGINT",
    };
    tracing::info!(signal = name, "Shutdown requested, draining launch queries");
}

/// Shutdown future for [`api::start_api_server`], completing on Ctrl+C
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, shutting down");
        return;
    }
    tracing::info!("Shutdown requested, draining launch queries");
}
