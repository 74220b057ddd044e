//! Pipeline API trait

use async_trait::async_trait;

use crate::client::models::TektonPipeline;
use crate::error::Result;

/// Pipeline operations for the Tekton pipeline API
#[async_trait]
pub trait PipelineApi: Send + Sync {
    /// Get a Tekton pipeline by ID
    async fn get_pipeline(&self, pipeline_id: &str) -> Result<TektonPipeline>;

    /// Delete a Tekton pipeline instance
    async fn delete_pipeline(&self, pipeline_id: &str) -> Result<()>;
}
