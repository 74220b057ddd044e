//! Filter argument types for CLI commands

use clap::Args;

use crate::client::models::{PropertyType, RunStatus};
use crate::client::{ListPipelineRunsOptions, ListPropertiesOptions, ListTriggersOptions};

/// Run status accepted by `--status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RunStatusArg {
    Pending,
    Waiting,
    Queued,
    Running,
    Cancelled,
    Cancelling,
    Failed,
    Error,
    Succeeded,
}

impl From<RunStatusArg> for RunStatus {
    fn from(arg: RunStatusArg) -> Self {
        match arg {
            RunStatusArg::Pending => RunStatus::Pending,
            RunStatusArg::Waiting => RunStatus::Waiting,
            RunStatusArg::Queued => RunStatus::Queued,
            RunStatusArg::Running => RunStatus::Running,
            RunStatusArg::Cancelled => RunStatus::Cancelled,
            RunStatusArg::Cancelling => RunStatus::Cancelling,
            RunStatusArg::Failed => RunStatus::Failed,
            RunStatusArg::Error => RunStatus::Error,
            RunStatusArg::Succeeded => RunStatus::Succeeded,
        }
    }
}

/// Filter arguments for the run list command.
#[derive(Args, Debug, Default, Clone)]
pub struct RunFilterArgs {
    /// Filter by run status
    #[arg(long, short = 's', value_enum)]
    pub status: Option<RunStatusArg>,

    /// Filter by the name of the trigger that started the run
    #[arg(long)]
    pub trigger_name: Option<String>,
}

impl RunFilterArgs {
    /// Apply the filters to list options.
    pub fn apply(&self, mut options: ListPipelineRunsOptions) -> ListPipelineRunsOptions {
        if let Some(status) = self.status {
            options = options.status(status.into());
        }
        if let Some(ref name) = self.trigger_name {
            options = options.trigger_name(name.clone());
        }
        options
    }
}

/// Property type accepted by `--type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PropertyTypeArg {
    Secure,
    Text,
    Integration,
    SingleSelect,
    Appconfig,
}

impl From<PropertyTypeArg> for PropertyType {
    fn from(arg: PropertyTypeArg) -> Self {
        match arg {
            PropertyTypeArg::Secure => PropertyType::Secure,
            PropertyTypeArg::Text => PropertyType::Text,
            PropertyTypeArg::Integration => PropertyType::Integration,
            PropertyTypeArg::SingleSelect => PropertyType::SingleSelect,
            PropertyTypeArg::Appconfig => PropertyType::Appconfig,
        }
    }
}

/// Filter arguments for the property list command.
///
/// `--type` accepts repeated flags and comma-separated values.
#[derive(Args, Debug, Default, Clone)]
pub struct PropertyFilterArgs {
    /// Filter by property name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by property type
    #[arg(long = "type", short = 't', value_enum, value_delimiter = ',')]
    pub types: Vec<PropertyTypeArg>,

    /// Sort field (name, type; prefix with - for descending)
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,
}

impl PropertyFilterArgs {
    /// Build list options for `pipeline_id`.
    pub fn to_options(&self, pipeline_id: &str) -> ListPropertiesOptions {
        let mut options = ListPropertiesOptions::new(pipeline_id);
        if let Some(ref name) = self.name {
            options = options.name(name.clone());
        }
        for t in &self.types {
            options = options.with_type((*t).into());
        }
        if let Some(ref sort) = self.sort {
            options = options.sort(sort.clone());
        }
        options
    }
}

/// Filter arguments for the trigger list command.
#[derive(Args, Debug, Default, Clone)]
pub struct TriggerFilterArgs {
    /// Filter by trigger type (manual, scm, generic, timer; comma-separated)
    #[arg(long = "type", short = 't')]
    pub trigger_type: Option<String>,

    /// Filter by trigger name
    #[arg(long)]
    pub name: Option<String>,

    /// Only disabled (true) or enabled (false) triggers
    #[arg(long)]
    pub disabled: Option<bool>,

    /// Filter by tag (repeatable)
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,
}

impl TriggerFilterArgs {
    /// Build list options for `pipeline_id`.
    pub fn to_options(&self, pipeline_id: &str) -> ListTriggersOptions {
        let mut options = ListTriggersOptions::new(pipeline_id);
        if let Some(ref trigger_type) = self.trigger_type {
            options = options.trigger_type(trigger_type.clone());
        }
        if let Some(ref name) = self.name {
            options = options.name(name.clone());
        }
        if let Some(disabled) = self.disabled {
            options = options.disabled(disabled);
        }
        for tag in &self.tags {
            options = options.tag(tag.clone());
        }
        options
    }
}
