//! API trait definitions split by resource
//!
//! This module organizes the Tekton pipeline API surface into focused sub-traits:
//! - [`PipelineApi`] - Pipeline read/delete operations
//! - [`PipelineRunApi`] - Pipeline run listing and run actions
//! - [`PropertyApi`] - Pipeline environment properties
//! - [`TriggerApi`] - Pipeline triggers
//!
//! The [`TektonPipelineApi`](super::TektonPipelineApi) super-trait combines all four.

mod pipeline;
mod property;
mod run;
mod trigger;

pub use pipeline::PipelineApi;
pub use property::PropertyApi;
pub use run::PipelineRunApi;
pub use trigger::TriggerApi;
