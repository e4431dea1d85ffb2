//! Logging decorator

use super::LaunchFetcher;
use crate::error::{Error, Result};
use crate::types::{Launch, SearchParams};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Structured record emitted after every fetch
#[derive(Debug, Serialize)]
pub struct FetchRecord<'a> {
    /// Fixed description of the call
    pub message: &'static str,
    /// When the call completed
    pub timestamp: DateTime<Utc>,
    /// Call inputs and outcome
    pub metadata: FetchMetadata<'a>,
}

/// Inputs and outcome of a fetch
#[derive(Debug, Serialize)]
pub struct FetchMetadata<'a> {
    /// Query that was issued
    pub params: &'a SearchParams,
    /// Launches returned, when the call succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<&'a [Launch]>,
    /// Display text of the error, when the call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Destination for [`FetchRecord`]s
pub trait RecordSink: Send + Sync {
    /// Emit one record
    ///
    /// # Errors
    /// Returns error if the record could not be written; callers ignore it.
    fn emit(&self, record: &FetchRecord<'_>) -> Result<()>;
}

/// Writes records as single-line JSON through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RecordSink for TracingSink {
    fn emit(&self, record: &FetchRecord<'_>) -> Result<()> {
        let line = serde_json::to_string(record).map_err(|e| Error::Serialization {
            context: "failed to encode fetch record".to_string(),
            source: e,
        })?;
        tracing::info!(record = %line, "{}", record.message);
        Ok(())
    }
}

/// Logs every call to the wrapped fetcher
///
/// The inner result is passed through untouched; a failing sink never
/// changes what the caller sees.
pub struct LoggingFetcher {
    inner: Arc<dyn LaunchFetcher>,
    sink: Arc<dyn RecordSink>,
}

impl LoggingFetcher {
    /// Log through [`TracingSink`]
    pub fn new(inner: Arc<dyn LaunchFetcher>) -> Self {
        Self::with_sink(inner, Arc::new(TracingSink))
    }

    /// Log through a custom sink
    pub fn with_sink(inner: Arc<dyn LaunchFetcher>, sink: Arc<dyn RecordSink>) -> Self {
        Self { inner, sink }
    }
}

#[async_trait]
impl LaunchFetcher for LoggingFetcher {
    async fn get(&self, params: SearchParams) -> Result<Vec<Launch>> {
        let result = self.inner.get(params).await;

        let record = FetchRecord {
            message: "called Get",
            timestamp: Utc::now(),
            metadata: FetchMetadata {
                params: &params,
                results: result.as_ref().ok().map(Vec::as_slice),
                error: result.as_ref().err().map(ToString::to_string),
            },
        };

        if let Err(e) = self.sink.emit(&record) {
            tracing::debug!(error = %e, "Failed to emit fetch record");
        }

        result
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Classify;
    use crate::repository::test_helpers::{
        CollectingSink, FailingSink, ScriptedFetcher, sample_launch, sample_params,
    };

    #[tokio::test]
    async fn passes_success_through_and_records_results() {
        let inner = Arc::new(ScriptedFetcher::new(vec![Ok(vec![sample_launch("a")])]));
        let sink = Arc::new(CollectingSink::default());
        let fetcher = LoggingFetcher::with_sink(inner.clone(), sink.clone());

        let launches = fetcher.get(sample_params()).await.unwrap();

        assert_eq!(launches, vec![sample_launch("a")]);
        assert_eq!(inner.calls().len(), 1);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record["message"], "called Get");
        assert!(record["timestamp"].is_string());
        assert_eq!(record["metadata"]["params"]["status"], "unspecified");
        assert_eq!(record["metadata"]["results"][0]["ID"], "a");
        assert!(record["metadata"].get("error").is_none());
    }

    #[tokio::test]
    async fn passes_error_through_and_records_it() {
        let inner = Arc::new(ScriptedFetcher::new(vec![Err(Error::missing(
            "no launches found",
        ))]));
        let sink = Arc::new(CollectingSink::default());
        let fetcher = LoggingFetcher::with_sink(inner, sink.clone());

        let err = fetcher.get(sample_params()).await.unwrap_err();

        assert!(err.is_missing());
        assert_eq!(err.to_string(), "no launches found");

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["metadata"]["error"], "no launches found");
        assert!(records[0]["metadata"].get("results").is_none());
    }

    #[tokio::test]
    async fn sink_failure_is_swallowed() {
        let inner = Arc::new(ScriptedFetcher::new(vec![
            Ok(vec![sample_launch("a")]),
            Err(Error::temporary("busy")),
        ]));
        let fetcher = LoggingFetcher::with_sink(inner, Arc::new(FailingSink));

        let ok = fetcher.get(sample_params()).await.unwrap();
        assert_eq!(ok.len(), 1);

        let err = fetcher.get(sample_params()).await.unwrap_err();
        assert!(err.is_temporary());
    }

    #[tokio::test]
    async fn tracing_sink_emits_without_error() {
        let launches = vec![sample_launch("a")];
        let params = sample_params();
        let record = FetchRecord {
            message: "called Get",
            timestamp: Utc::now(),
            metadata: FetchMetadata {
                params: &params,
                results: Some(&launches),
                error: None,
            },
        };

        assert!(TracingSink.emit(&record).is_ok());
    }
}
