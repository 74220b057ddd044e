//! Tekton pipeline API data models
//!
//! Domain types returned by the Continuous Delivery Tekton pipeline service,
//! organized by resource type.

mod pipeline;
mod property;
mod run;
mod trigger;

pub use pipeline::{TektonPipeline, Worker};
pub use property::{PropertiesCollection, Property, PropertyType};
pub use run::{
    LogsCollection, PipelineRun, PipelineRunLog, PipelineRunsCollection, RunStatus, RunsPageLink,
    StepLog, UserInfo,
};
pub use trigger::{Trigger, TriggersCollection};
