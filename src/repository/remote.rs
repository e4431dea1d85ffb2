//! Base repository backed by the upstream launch API

use super::LaunchFetcher;
use super::dto::LaunchPage;
use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use crate::types::{Launch, SearchParams};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::StatusCode;
use tracing::debug;

/// Path of the launch listing on the upstream host
const LAUNCH_PATH: &str = "/2.2.0/launch";

/// Fetches launches from the upstream REST API
///
/// Translates transport outcomes into domain results:
/// - 404 becomes a missing error
/// - 401/403 become unauthorized errors
/// - 429 and 5xx become temporary errors
/// - transport failures and malformed bodies are unclassified
#[derive(Debug, Clone)]
pub struct LaunchRepository {
    http_client: reqwest::Client,
    endpoint: String,
}

impl LaunchRepository {
    /// Create a repository for the configured upstream
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Network {
                context: "failed to create HTTP client".to_string(),
                source: e,
            })?;

        Ok(Self {
            http_client,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), LAUNCH_PATH),
        })
    }

    /// Full URL of the launch listing, without query
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query(params: &SearchParams) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("net__gte", rfc3339(params.net_gte)),
            ("net__lt", rfc3339(params.net_lt)),
        ];
        if let Some(code) = params.status.remote_code() {
            query.push(("status", code.to_string()));
        }
        query
    }
}

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl LaunchFetcher for LaunchRepository {
    async fn get(&self, params: SearchParams) -> Result<Vec<Launch>> {
        let query = Self::query(&params);
        debug!(endpoint = %self.endpoint, ?query, "Fetching launches");

        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::Network {
                context: "http request failed".to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| Error::Network {
            context: "failed to read response body".to_string(),
            source: e,
        })?;

        match status {
            StatusCode::NOT_FOUND => return Err(Error::missing("no launches found")),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(Error::unauthorized(format!(
                    "upstream rejected the request ({status})"
                )));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(Error::temporary(format!(
                    "upstream is throttling requests ({status})"
                )));
            }
            s if s.is_server_error() => {
                return Err(Error::temporary(format!("upstream unavailable ({status})")));
            }
            s if !s.is_success() => {
                return Err(Error::Other(format!(
                    "unexpected upstream response ({status})"
                )));
            }
            _ => {}
        }

        let page: LaunchPage =
            serde_json::from_slice(&body).map_err(|e| Error::Serialization {
                context: "failed to unmarshal launches result".to_string(),
                source: e,
            })?;

        debug!(
            count = page.count,
            returned = page.results.len(),
            "Fetched launches"
        );

        Ok(page.results.into_iter().map(Launch::from).collect())
    }
}
