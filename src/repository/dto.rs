//! Wire format of the upstream `/launch` endpoint

use crate::types::Launch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Paginated result envelope
#[derive(Debug, Deserialize)]
pub(crate) struct LaunchPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<LaunchDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaunchDto {
    #[serde(default, alias = "ID", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "Net", alias = "NET")]
    pub net: DateTime<Utc>,
    #[serde(default)]
    pub launch_service_provider: Option<ProviderDto>,
    #[serde(default, alias = "Status")]
    pub status: Option<StatusDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderDto {
    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusDto {
    #[serde(default, alias = "Description", deserialize_with = "null_as_default")]
    pub description: String,
}

/// Explicit `null` decodes to the type's default, same as an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<LaunchDto> for Launch {
    fn from(dto: LaunchDto) -> Self {
        Launch {
            id: dto.id,
            name: dto.name,
            net: dto.net,
            provider_name: dto.launch_service_provider.unwrap_or_default().name,
            status: dto.status.unwrap_or_default().description,
        }
    }
}
