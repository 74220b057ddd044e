//! Request option types for list and action endpoints
//!
//! Each option struct enumerates the optional fields an endpoint accepts.
//! A field left as `None` is omitted from the request, so the server default
//! applies.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::models::{Property, PropertyType, RunStatus};
use crate::error::{ConfigError, Result};

/// Page size the service uses when `limit` is omitted.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Largest page size the service accepts.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Options for listing pipeline runs.
///
/// # Example
/// ```ignore
/// let options = ListPipelineRunsOptions::new("94619026-912b-4d92-8f51-6c74f0692d90")
///     .limit(10)
///     .status(RunStatus::Succeeded)
///     .trigger_name("manual-trigger");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPipelineRunsOptions {
    /// Pipeline ID (required)
    pub pipeline_id: String,
    /// Cursor of the page to fetch. Managed by the pager; leave unset.
    pub start: Option<String>,
    /// Items per page (default: 50, max: 100)
    pub limit: Option<u32>,
    /// Number of runs to skip before the first page
    pub offset: Option<u64>,
    /// Only return runs with this status
    pub status: Option<RunStatus>,
    /// Only return runs started by this trigger
    pub trigger_name: Option<String>,
}

impl ListPipelineRunsOptions {
    /// Create options for the given pipeline with server defaults.
    pub fn new(pipeline_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            ..Self::default()
        }
    }

    /// Set the page start cursor.
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the offset.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Filter by run status.
    pub fn status(mut self, status: RunStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter by trigger name.
    pub fn trigger_name(mut self, name: impl Into<String>) -> Self {
        self.trigger_name = Some(name.into());
        self
    }

    /// Check the filters for values the service would reject.
    pub fn validate(&self) -> Result<()> {
        if self.pipeline_id.trim().is_empty() {
            return Err(ConfigError::Invalid("pipeline ID must not be empty".to_string()).into());
        }

        if let Some(limit) = self.limit {
            if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
                return Err(ConfigError::Invalid(format!(
                    "limit must be between 1 and {}, got {}",
                    MAX_PAGE_LIMIT, limit
                ))
                .into());
            }
        }

        if matches!(self.trigger_name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(
                ConfigError::Invalid("trigger name filter must not be blank".to_string()).into(),
            );
        }

        Ok(())
    }

    /// Convert to query string parameters.
    ///
    /// Uses the service parameter names `start`, `limit`, `offset`, `status`
    /// and `trigger.name`.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref start) = self.start {
            params.push(("start", start.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(ref name) = self.trigger_name {
            params.push(("trigger.name", name.clone()));
        }

        params
    }
}

/// Options for cancelling a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelPipelineRunOptions {
    /// Pipeline ID (required)
    pub pipeline_id: String,
    /// Run ID (required)
    pub run_id: String,
    /// Force-cancel the run without waiting for running tasks to finish
    pub force: Option<bool>,
}

impl CancelPipelineRunOptions {
    /// Create cancel options for a run.
    pub fn new(pipeline_id: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            run_id: run_id.into(),
            force: None,
        }
    }

    /// Set the force flag.
    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}

/// Options for starting a pipeline run from a trigger.
///
/// Serializes to the request body; `pipeline_id` only selects the endpoint.
///
/// # Example
/// ```ignore
/// let options = CreatePipelineRunOptions::new(pipeline_id)
///     .trigger_name("Manual Trigger")
///     .property("branch", "main")
///     .secure_property("deploy-key", "s3cr3t")
///     .header("X-Source", "tektonop");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePipelineRunOptions {
    /// Pipeline ID (required)
    #[serde(skip)]
    pub pipeline_id: String,
    /// Trigger to start the run from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_name: Option<String>,
    /// Trigger property overrides
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trigger_properties: Vec<Property>,
    /// Secure trigger property overrides
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secure_trigger_properties: Vec<Property>,
    /// Headers exposed to the run as if sent with a webhook event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_headers: Option<Map<String, Value>>,
    /// Payload exposed to the run as if sent with a webhook event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_body: Option<Value>,
}

impl CreatePipelineRunOptions {
    /// Create options for the given pipeline.
    pub fn new(pipeline_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            ..Self::default()
        }
    }

    /// Set the trigger to run.
    pub fn trigger_name(mut self, name: impl Into<String>) -> Self {
        self.trigger_name = Some(name.into());
        self
    }

    /// Override a text trigger property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.trigger_properties
            .push(Property::new(name, value, PropertyType::Text));
        self
    }

    /// Override a secure trigger property.
    pub fn secure_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secure_trigger_properties
            .push(Property::new(name, value, PropertyType::Secure));
        self
    }

    /// Add a trigger header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.trigger_headers
            .get_or_insert_with(Map::new)
            .insert(name.into(), Value::String(value.into()));
        self
    }

    /// Set the trigger body.
    pub fn body(mut self, body: Value) -> Self {
        self.trigger_body = Some(body);
        self
    }

    /// Check the options before a request is sent.
    pub fn validate(&self) -> Result<()> {
        if self.pipeline_id.trim().is_empty() {
            return Err(ConfigError::Invalid("pipeline ID must not be empty".to_string()).into());
        }
        if matches!(self.trigger_name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(ConfigError::Invalid("trigger name must not be blank".to_string()).into());
        }
        Ok(())
    }
}

/// Options for listing pipeline environment properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPropertiesOptions {
    /// Pipeline ID (required)
    pub pipeline_id: String,
    /// Only return the property with this name
    pub name: Option<String>,
    /// Only return properties of these types
    pub types: Vec<PropertyType>,
    /// Sort field (`name`, `type`, prefix with `-` for descending)
    pub sort: Option<String>,
}

impl ListPropertiesOptions {
    /// Create options for the given pipeline.
    pub fn new(pipeline_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            ..Self::default()
        }
    }

    /// Filter by property name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a property type to the type filter.
    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.types.push(property_type);
        self
    }

    /// Set the sort field.
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref name) = self.name {
            params.push(("name", name.clone()));
        }
        if !self.types.is_empty() {
            let types: Vec<&str> = self.types.iter().map(PropertyType::as_str).collect();
            params.push(("type", types.join(",")));
        }
        if let Some(ref sort) = self.sort {
            params.push(("sort", sort.clone()));
        }

        params
    }
}

/// Options for listing pipeline triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTriggersOptions {
    /// Pipeline ID (required)
    pub pipeline_id: String,
    /// Comma-separated trigger types (manual, scm, generic, timer)
    pub trigger_type: Option<String>,
    /// Only return the trigger with this name
    pub name: Option<String>,
    /// Only return triggers using this event listener
    pub event_listener: Option<String>,
    /// Only return triggers using this worker ID
    pub worker_id: Option<String>,
    /// Only return triggers using this worker name
    pub worker_name: Option<String>,
    /// Only return disabled (`true`) or enabled (`false`) triggers
    pub disabled: Option<bool>,
    /// Only return triggers carrying any of these tags
    pub tags: Vec<String>,
}

impl ListTriggersOptions {
    /// Create options for the given pipeline.
    pub fn new(pipeline_id: impl Into<String>) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            ..Self::default()
        }
    }

    /// Filter by trigger type(s).
    pub fn trigger_type(mut self, trigger_type: impl Into<String>) -> Self {
        self.trigger_type = Some(trigger_type.into());
        self
    }

    /// Filter by trigger name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by enabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Add a tag to the tag filter.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(ref trigger_type) = self.trigger_type {
            params.push(("type", trigger_type.clone()));
        }
        if let Some(ref name) = self.name {
            params.push(("name", name.clone()));
        }
        if let Some(ref listener) = self.event_listener {
            params.push(("event_listener", listener.clone()));
        }
        if let Some(ref worker_id) = self.worker_id {
            params.push(("worker.id", worker_id.clone()));
        }
        if let Some(ref worker_name) = self.worker_name {
            params.push(("worker.name", worker_name.clone()));
        }
        if let Some(disabled) = self.disabled {
            params.push(("disabled", disabled.to_string()));
        }
        if !self.tags.is_empty() {
            params.push(("tags", self.tags.join(",")));
        }

        params
    }
}
