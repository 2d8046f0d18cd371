//! DTOs for the usage-status endpoint.

use chrono::{DateTime, Utc};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::usage_service::{DEFAULT_MAX_RESULT, DEFAULT_OFFSET};
use crate::application::services::{UsageQuery, UsageReport};
use crate::domain::entities::AccessLog;

/// Query parameters for `GET /{short_id}/status`.
///
/// Uses `serde_with` to parse the numeric parameters from query strings;
/// negative or non-numeric values are rejected.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct StatusQueryParams {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub full_info: bool,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub max_result: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u32>,
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitive.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a boolean flag",
        )),
    }
}

impl From<StatusQueryParams> for UsageQuery {
    fn from(params: StatusQueryParams) -> Self {
        Self {
            full_info: params.full_info,
            max_result: params.max_result.map_or(DEFAULT_MAX_RESULT, i64::from),
            offset: params.offset.map_or(DEFAULT_OFFSET, i64::from),
        }
    }
}

/// One access log entry.
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub accessed_at: DateTime<Utc>,
    pub client_info: String,
}

impl From<AccessLog> for LogEntry {
    fn from(log: AccessLog) -> Self {
        Self {
            accessed_at: log.accessed_at,
            client_info: log.client_info,
        }
    }
}

/// Usage report; `logs` is omitted unless `full_info` was requested.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub total: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogEntry>>,
}

impl From<UsageReport> for StatusResponse {
    fn from(report: UsageReport) -> Self {
        Self {
            total: report.total,
            logs: report
                .logs
                .map(|logs| logs.into_iter().map(LogEntry::from).collect()),
        }
    }
}
