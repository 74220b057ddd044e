//! Trigger models

use serde::{Deserialize, Serialize};

use super::Worker;

/// Pipeline trigger (manual, scm, timer or generic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger ID
    pub id: String,

    /// Trigger name
    pub name: String,

    /// Trigger type (manual, scm, timer, generic)
    #[serde(rename = "type")]
    pub trigger_type: String,

    /// Event listener name from the pipeline definition
    #[serde(default)]
    pub event_listener: String,

    /// Whether the trigger is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Optional trigger tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Maximum concurrent runs for this trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent_runs: Option<u32>,

    /// Worker override for this trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<Worker>,

    /// Cron expression (timer triggers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,

    /// Timezone for the cron expression (timer triggers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// API URL for the trigger
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Response of the trigger list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggersCollection {
    #[serde(default)]
    pub triggers: Vec<Trigger>,
}
