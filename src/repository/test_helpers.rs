//! Test doubles shared by repository, service and API tests

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::{FetchRecord, LaunchFetcher, RecordSink};
use crate::error::{Error, Result};
use crate::types::{Launch, LaunchStatus, SearchParams};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Fetcher that replays scripted outcomes and records the params it saw
///
/// Once the script runs out it answers with an empty list.
#[derive(Default)]
pub(crate) struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<Vec<Launch>>>>,
    calls: Mutex<Vec<SearchParams>>,
}

impl ScriptedFetcher {
    pub(crate) fn new(script: Vec<Result<Vec<Launch>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<SearchParams> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LaunchFetcher for ScriptedFetcher {
    async fn get(&self, params: SearchParams) -> Result<Vec<Launch>> {
        self.calls.lock().unwrap().push(params);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Sink that keeps every record as JSON
#[derive(Default)]
pub(crate) struct CollectingSink {
    records: Mutex<Vec<serde_json::Value>>,
}

impl CollectingSink {
    pub(crate) fn records(&self) -> Vec<serde_json::Value> {
        self.records.lock().unwrap().clone()
    }
}

impl RecordSink for CollectingSink {
    fn emit(&self, record: &FetchRecord<'_>) -> Result<()> {
        let value = serde_json::to_value(record).unwrap();
        self.records.lock().unwrap().push(value);
        Ok(())
    }
}

/// Sink whose every emission fails
pub(crate) struct FailingSink;

impl RecordSink for FailingSink {
    fn emit(&self, _record: &FetchRecord<'_>) -> Result<()> {
        Err(Error::Other("log pipe closed".to_string()))
    }
}

pub(crate) fn sample_launch(id: &str) -> Launch {
    Launch {
        id: id.to_string(),
        name: format!("Mission {id}"),
        net: Utc.with_ymd_and_hms(2021, 9, 3, 12, 0, 0).unwrap(),
        provider_name: "SpaceX".to_string(),
        status: "Launch was successful.".to_string(),
    }
}

pub(crate) fn sample_params() -> SearchParams {
    SearchParams {
        net_gte: Utc.with_ymd_and_hms(2021, 9, 3, 0, 0, 0).unwrap(),
        net_lt: Utc.with_ymd_and_hms(2021, 9, 4, 0, 0, 0).unwrap(),
        status: LaunchStatus::Unspecified,
    }
}
