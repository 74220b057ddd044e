//! Tekton pipeline API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod models;
pub mod options;
pub mod pager;
pub mod tekton;

pub use api::{PipelineApi, PipelineRunApi, PropertyApi, TriggerApi};
#[cfg(test)]
pub use mock::MockTektonClient;
pub use options::{
    CancelPipelineRunOptions, CreatePipelineRunOptions, DEFAULT_PAGE_LIMIT,
    ListPipelineRunsOptions, ListPropertiesOptions, ListTriggersOptions, MAX_PAGE_LIMIT,
};
pub use pager::{
    ListOperation, Page, PageRequest, Pager, PipelineRunsList, PipelineRunsPager,
    pipeline_runs_pager,
};
pub use tekton::{DEFAULT_SERVICE_URL, TektonPipelineClient};

/// Combined Tekton pipeline API surface
///
/// Implemented automatically for any type implementing all four sub-traits,
/// so command handlers can take a single `&dyn TektonPipelineApi`.
pub trait TektonPipelineApi: PipelineApi + PipelineRunApi + PropertyApi + TriggerApi {}

impl<T> TektonPipelineApi for T where T: PipelineApi + PipelineRunApi + PropertyApi + TriggerApi {}
