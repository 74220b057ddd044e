//! Pipeline trigger API trait

use async_trait::async_trait;

use crate::client::models::Trigger;
use crate::client::options::ListTriggersOptions;
use crate::error::Result;

/// Trigger operations for the Tekton pipeline API
#[async_trait]
pub trait TriggerApi: Send + Sync {
    /// List the pipeline's triggers
    async fn list_triggers(&self, options: &ListTriggersOptions) -> Result<Vec<Trigger>>;
}
