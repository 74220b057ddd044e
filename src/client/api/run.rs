//! Pipeline run API trait

use async_trait::async_trait;

use crate::client::models::{LogsCollection, PipelineRun, PipelineRunsCollection, StepLog};
use crate::client::options::{
    CancelPipelineRunOptions, CreatePipelineRunOptions, ListPipelineRunsOptions,
};
use crate::error::Result;

/// Pipeline run operations for the Tekton pipeline API
///
/// `list_pipeline_runs` returns a single page. Use
/// [`Pager`](crate::client::Pager) to walk every page.
#[async_trait]
pub trait PipelineRunApi: Send + Sync {
    /// List one page of pipeline runs
    async fn list_pipeline_runs(
        &self,
        options: &ListPipelineRunsOptions,
    ) -> Result<PipelineRunsCollection>;

    /// Start a new pipeline run from a trigger
    async fn create_pipeline_run(&self, options: &CreatePipelineRunOptions) -> Result<PipelineRun>;

    /// Get a single pipeline run.
    ///
    /// `includes` may be `definitions` to embed the definitions used by the run.
    async fn get_pipeline_run(
        &self,
        pipeline_id: &str,
        run_id: &str,
        includes: Option<&str>,
    ) -> Result<PipelineRun>;

    /// Cancel a running pipeline run
    async fn cancel_pipeline_run(&self, options: &CancelPipelineRunOptions) -> Result<PipelineRun>;

    /// Rerun a pipeline run with the same data
    async fn rerun_pipeline_run(&self, pipeline_id: &str, run_id: &str) -> Result<PipelineRun>;

    /// Delete a pipeline run record
    async fn delete_pipeline_run(&self, pipeline_id: &str, run_id: &str) -> Result<()>;

    /// List the step logs of a pipeline run
    async fn get_pipeline_run_logs(&self, pipeline_id: &str, run_id: &str)
    -> Result<LogsCollection>;

    /// Get the log content of one step, by the log ID from the logs list
    async fn get_pipeline_run_log_content(
        &self,
        pipeline_id: &str,
        run_id: &str,
        log_id: &str,
    ) -> Result<StepLog>;
}
