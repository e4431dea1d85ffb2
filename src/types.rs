//! Core domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single rocket launch as reported by the upstream provider
///
/// Field names on the wire are kept identical to the public JSON contract
/// (`ID`, `Name`, `NET`, `ProviderName`, `Status`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Launch {
    /// Upstream launch identifier
    #[serde(rename = "ID")]
    pub id: String,

    /// Mission name
    #[serde(rename = "Name")]
    pub name: String,

    /// "No Earlier Than": expected or actual launch instant
    #[serde(rename = "NET")]
    pub net: DateTime<Utc>,

    /// Launch service provider name
    #[serde(rename = "ProviderName")]
    pub provider_name: String,

    /// Provider's free-text status description
    #[serde(rename = "Status")]
    pub status: String,
}

/// Launch outcome filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchStatus {
    /// No status filter
    #[default]
    Unspecified,
    /// Only successful launches
    Succeeded,
    /// Only failed launches
    Failed,
}

impl LaunchStatus {
    /// Status code understood by the upstream `status` query parameter
    ///
    /// `None` means no filter is sent.
    pub fn remote_code(&self) -> Option<u8> {
        match self {
            LaunchStatus::Unspecified => None,
            LaunchStatus::Succeeded => Some(3),
            LaunchStatus::Failed => Some(4),
        }
    }
}

/// Query for the launch repository, built per call by the service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// Lower bound of the NET window
    pub net_gte: DateTime<Utc>,
    /// Upper bound of the NET window
    pub net_lt: DateTime<Utc>,
    /// Outcome filter
    pub status: LaunchStatus,
}
