//! Pipeline property API trait

use async_trait::async_trait;

use crate::client::models::Property;
use crate::client::options::ListPropertiesOptions;
use crate::error::Result;

/// Environment property operations for the Tekton pipeline API
#[async_trait]
pub trait PropertyApi: Send + Sync {
    /// List the pipeline's environment properties
    async fn list_properties(&self, options: &ListPropertiesOptions) -> Result<Vec<Property>>;
}
