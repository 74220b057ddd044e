//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use chrono::{DateTime, TimeZone, Utc};

use super::models::{
    PipelineRun, PipelineRunLog, PipelineRunsCollection, Property, PropertyType, RunStatus,
    RunsPageLink, StepLog, TektonPipeline, Trigger, Worker,
};

/// Base of the page links produced by [`run_page`].
const RUNS_HREF: &str = "https://api.example.com/pipeline/v2/tekton_pipelines/p1/pipeline_runs";

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

// ============================================================================
// PipelineBuilder
// ============================================================================

/// Builder for creating test TektonPipeline instances.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    id: String,
    name: String,
    status: String,
    enabled: bool,
    build_number: Option<u64>,
}

impl PipelineBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Pipeline {}", &id),
            id,
            status: "configured".to_string(),
            enabled: true,
            build_number: None,
        }
    }

    /// Set the pipeline name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the enabled state.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the latest build number.
    pub fn build_number(mut self, number: u64) -> Self {
        self.build_number = Some(number);
        self
    }

    /// Build the TektonPipeline.
    pub fn build(self) -> TektonPipeline {
        TektonPipeline {
            id: self.id,
            name: self.name,
            status: self.status,
            href: None,
            runs_url: None,
            build_number: self.build_number,
            enabled: self.enabled,
            enable_notifications: false,
            enable_partial_cloning: false,
            worker: Some(Worker {
                id: "public".to_string(),
                name: Some("IBM Managed workers".to_string()),
                worker_type: Some("public".to_string()),
            }),
            created_at: Some(fixed_time()),
            updated_at: Some(fixed_time()),
        }
    }
}

// ============================================================================
// PipelineRunBuilder
// ============================================================================

/// Builder for creating test PipelineRun instances.
///
/// # Example
/// ```ignore
/// let run = PipelineRunBuilder::new("run-1")
///     .status(RunStatus::Failed)
///     .listener_name("manual-listener")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PipelineRunBuilder {
    id: String,
    status: RunStatus,
    pipeline_id: String,
    listener_name: String,
    error_message: Option<String>,
}

impl PipelineRunBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: RunStatus::Succeeded,
            pipeline_id: "p1".to_string(),
            listener_name: "manual-listener".to_string(),
            error_message: None,
        }
    }

    /// Set the run status.
    pub fn status(mut self, status: RunStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the owning pipeline.
    pub fn pipeline_id(mut self, pipeline_id: impl Into<String>) -> Self {
        self.pipeline_id = pipeline_id.into();
        self
    }

    /// Set the event listener name.
    pub fn listener_name(mut self, name: impl Into<String>) -> Self {
        self.listener_name = name.into();
        self
    }

    /// Set an error message.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Build the PipelineRun.
    pub fn build(self) -> PipelineRun {
        PipelineRun {
            href: Some(format!("{}/{}", RUNS_HREF, self.id)),
            id: self.id,
            status: self.status,
            pipeline_id: self.pipeline_id,
            listener_name: self.listener_name,
            definition_id: None,
            user_info: None,
            worker: None,
            trigger: None,
            properties: Vec::new(),
            error_message: self.error_message,
            run_url: None,
            created_at: Some(fixed_time()),
            updated_at: Some(fixed_time()),
        }
    }
}

// ============================================================================
// PropertyBuilder / TriggerBuilder
// ============================================================================

/// Builder for creating test Property instances.
#[derive(Debug, Clone)]
pub struct PropertyBuilder {
    name: String,
    value: Option<String>,
    property_type: PropertyType,
    locked: bool,
}

impl PropertyBuilder {
    /// Create a new text property builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some("value".to_string()),
            property_type: PropertyType::Text,
            locked: false,
        }
    }

    /// Set the property value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the property type.
    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    /// Set the locked flag.
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Build the Property.
    pub fn build(self) -> Property {
        Property {
            name: self.name,
            value: self.value,
            property_type: self.property_type,
            options: Vec::new(),
            path: None,
            locked: self.locked,
            href: None,
        }
    }
}

/// Builder for creating test Trigger instances.
#[derive(Debug, Clone)]
pub struct TriggerBuilder {
    id: String,
    name: String,
    trigger_type: String,
    enabled: bool,
    tags: Vec<String>,
}

impl TriggerBuilder {
    /// Create a new manual trigger builder.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("trigger-{}", &id),
            id,
            trigger_type: "manual".to_string(),
            enabled: true,
            tags: Vec::new(),
        }
    }

    /// Set the trigger name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the trigger type.
    pub fn trigger_type(mut self, trigger_type: impl Into<String>) -> Self {
        self.trigger_type = trigger_type.into();
        self
    }

    /// Set the enabled state.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Build the Trigger.
    pub fn build(self) -> Trigger {
        Trigger {
            id: self.id,
            name: self.name,
            trigger_type: self.trigger_type,
            event_listener: "manual-listener".to_string(),
            enabled: self.enabled,
            tags: self.tags,
            max_concurrent_runs: None,
            worker: None,
            cron: None,
            timezone: None,
            href: None,
        }
    }
}

// ============================================================================
// Step logs
// ============================================================================

/// A step log reference and its content, for `MockTektonClient::with_step_logs`.
pub fn step_log(id: &str, step: &str, data: &str) -> (PipelineRunLog, StepLog) {
    (
        PipelineRunLog {
            id: id.to_string(),
            name: format!("pipelinerun-pod/{}", step),
            href: Some(format!("{}/run-1/logs/{}", RUNS_HREF, id)),
        },
        StepLog {
            id: id.to_string(),
            data: data.to_string(),
        },
    )
}

// ============================================================================
// Run pages
// ============================================================================

/// Build one page of runs whose `next` link carries `start=<next>`.
pub fn run_page(runs: Vec<PipelineRun>, next: Option<&str>) -> PipelineRunsCollection {
    let limit = runs.len().max(1) as u32;
    PipelineRunsCollection {
        pipeline_runs: runs,
        limit,
        first: Some(RunsPageLink {
            href: format!("{}?limit={}", RUNS_HREF, limit),
        }),
        next: next.map(|cursor| RunsPageLink {
            href: format!("{}?limit={}&start={}", RUNS_HREF, limit, cursor),
        }),
        last: None,
    }
}

/// Split `total` runs named `run-1..=run-<total>` into pages of `limit`.
///
/// Returns `(start, page)` pairs: the first page is keyed by `None`, later
/// pages by cursors `c1`, `c2`, ... The last page has no `next` link.
pub fn paged_runs(
    pipeline_id: &str,
    total: usize,
    limit: usize,
) -> Vec<(Option<String>, PipelineRunsCollection)> {
    let limit = limit.max(1);
    let runs: Vec<PipelineRun> = (1..=total)
        .map(|i| {
            PipelineRunBuilder::new(format!("run-{}", i))
                .pipeline_id(pipeline_id)
                .build()
        })
        .collect();

    let chunks: Vec<Vec<PipelineRun>> = runs.chunks(limit).map(<[PipelineRun]>::to_vec).collect();
    let page_count = chunks.len().max(1);

    let mut pages = Vec::with_capacity(page_count);
    let mut chunks = chunks.into_iter();
    for index in 0..page_count {
        let start = (index > 0).then(|| format!("c{}", index));
        let next = (index + 1 < page_count).then(|| format!("c{}", index + 1));
        let items = chunks.next().unwrap_or_default();
        pages.push((start, run_page(items, next.as_deref())));
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_runs_layout() {
        let pages = paged_runs("p1", 7, 3);
        let sizes: Vec<usize> = pages.iter().map(|(_, p)| p.pipeline_runs.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);

        let starts: Vec<Option<String>> = pages.iter().map(|(s, _)| s.clone()).collect();
        assert_eq!(
            starts,
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );

        assert_eq!(pages[0].1.next_start().unwrap(), Some("c1".to_string()));
        assert_eq!(pages[2].1.next_start().unwrap(), None);
        assert_eq!(pages[2].1.pipeline_runs[0].id, "run-7");
    }

    #[test]
    fn test_paged_runs_empty() {
        let pages = paged_runs("p1", 0, 5);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].1.pipeline_runs.is_empty());
        assert!(pages[0].1.next.is_none());
    }
}
