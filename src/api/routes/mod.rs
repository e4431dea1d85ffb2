//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`launches`] - Today's launches and failed launches in a range
//! - [`system`] - Health and OpenAPI

use serde::{Deserialize, Serialize};

mod launches;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use launches::*;
pub use system::*;

/// Query parameters for GET /failed
///
/// Both fields are kept as raw strings so that a missing or malformed value
/// can be reported by name. Built from the raw pairs with
/// [`FailedQuery::from_pairs`]; a repeated parameter keeps its first value.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FailedQuery {
    /// Start of the range, RFC3339 (inclusive)
    pub start: Option<String>,
    /// End of the range, RFC3339
    pub end: Option<String>,
}

impl FailedQuery {
    /// Collect `start` and `end` from raw query pairs, first occurrence wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "start" => &mut query.start,
                "end" => &mut query.end,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}
