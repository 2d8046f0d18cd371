//! DTOs for the delete endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub short_id: String,
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted(short_id: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            message: "Short URL deleted".to_string(),
        }
    }
}
