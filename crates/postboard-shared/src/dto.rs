//! Data Transfer Objects - form bodies and JSON responses.

use serde::{Deserialize, Serialize};

/// Form submitted to `POST /add_post`. Missing fields become empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPostForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub post: String,
}

/// Form submitted to `POST /update_post/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostForm {
    #[serde(default)]
    pub updated_post: String,
}

/// Body of `GET /health`.
///
/// Healthy responses carry `timestamp`, unhealthy ones carry `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn healthy(timestamp: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Some(timestamp.into()),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            timestamp: None,
            error: Some(error.into()),
        }
    }
}
