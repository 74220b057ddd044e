//! Trigger display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Trigger;

/// Trigger display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TriggerDisplay {
    #[tabled(rename = "TRIGGER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub trigger_type: String,

    #[tabled(rename = "LISTENER")]
    pub event_listener: String,

    #[tabled(rename = "ENABLED")]
    pub enabled: bool,

    /// Comma-separated tags
    #[tabled(rename = "TAGS")]
    pub tags: String,
}

impl From<Trigger> for TriggerDisplay {
    fn from(trigger: Trigger) -> Self {
        Self {
            id: trigger.id,
            name: trigger.name,
            trigger_type: trigger.trigger_type,
            event_listener: trigger.event_listener,
            enabled: trigger.enabled,
            tags: trigger.tags.join(","),
        }
    }
}
