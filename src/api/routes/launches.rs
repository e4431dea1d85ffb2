//! Launch query handlers.

use super::FailedQuery;
use crate::api::AppState;
use crate::error::{Error, Result};
use crate::types::Launch;
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};

/// GET /today - Launches scheduled for the current UTC day
#[utoipa::path(
    get,
    path = "/today",
    tag = "launches",
    responses(
        (status = 200, description = "Launches with NET on the current UTC day", body = Vec<Launch>),
        (status = 401, description = "Upstream rejected the request"),
        (status = 404, description = "Upstream found no launches"),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Upstream temporarily unavailable")
    )
)]
pub async fn today(State(state): State<AppState>) -> Result<Json<Vec<Launch>>> {
    let launches = state.launches.today().await?;
    Ok(Json(launches))
}

/// GET /failed - Failed launches in a date range
#[utoipa::path(
    get,
    path = "/failed",
    tag = "launches",
    params(FailedQuery),
    responses(
        (status = 200, description = "Failed launches with NET in the range", body = Vec<Launch>),
        (status = 400, description = "Missing or malformed parameter, or end before start"),
        (status = 401, description = "Upstream rejected the request"),
        (status = 404, description = "Upstream found no launches"),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Upstream temporarily unavailable")
    )
)]
pub async fn failed(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Launch>>> {
    let query = FailedQuery::from_pairs(pairs);
    let start_raw = required(query.start.as_deref(), "start")?;
    let end_raw = required(query.end.as_deref(), "end")?;
    let start = parse_instant(start_raw, "start")?;
    let end = parse_instant(end_raw, "end")?;

    let launches = state.launches.failed(start, end).await?;
    Ok(Json(launches))
}

/// An absent or empty parameter is missing
fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::invalid(format!("missing required parameter: {name}")))
}

fn parse_instant(raw: &str, name: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| Error::invalid(format!("badly formatted parameter: {name}")))
}
