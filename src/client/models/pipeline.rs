//! Pipeline models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tekton pipeline resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TektonPipeline {
    /// Pipeline ID (same as the toolchain tool ID)
    pub id: String,

    /// Pipeline name
    #[serde(default)]
    pub name: String,

    /// Pipeline status (configured, configuring)
    #[serde(default)]
    pub status: String,

    /// API URL for interacting with the pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// URL of the pipeline runs collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs_url: Option<String>,

    /// Latest pipeline run build number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<u64>,

    /// Whether the pipeline is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Whether run events are sent to notification tools
    #[serde(default)]
    pub enable_notifications: bool,

    /// Whether partial cloning is used for repositories
    #[serde(default)]
    pub enable_partial_cloning: bool,

    /// Default worker for the pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<Worker>,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Worker that executes pipeline runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Worker ID (`public` for the shared managed worker)
    pub id: String,

    /// Worker name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Worker type (private, public)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<String>,
}
