//! DTOs for the liveness probe.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::repositories::ProbeError;

/// Liveness probe result.
///
/// `time` is present when the database answered; `error` and `detail` are
/// present when it did not.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl PingResponse {
    pub fn available(time: DateTime<Utc>) -> Self {
        Self {
            status: "available".to_string(),
            time: Some(time),
            error: None,
            detail: None,
        }
    }

    pub fn unavailable(error: &ProbeError) -> Self {
        Self {
            status: "unavailable".to_string(),
            time: None,
            error: Some(error.label().to_string()),
            detail: Some(error.to_string()),
        }
    }
}
