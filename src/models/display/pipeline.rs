//! Pipeline display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::TektonPipeline;
use crate::output::formatters::format_timestamp_local;

/// Pipeline display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PipelineDisplay {
    #[tabled(rename = "PIPELINE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "ENABLED")]
    pub enabled: bool,

    /// Latest build number, "--" before the first run
    #[tabled(rename = "BUILD")]
    pub build_number: String,

    #[tabled(rename = "WORKER")]
    pub worker: String,

    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl From<TektonPipeline> for PipelineDisplay {
    fn from(pipeline: TektonPipeline) -> Self {
        let worker = pipeline
            .worker
            .map(|w| w.name.unwrap_or(w.id))
            .unwrap_or_else(|| "--".to_string());

        Self {
            id: pipeline.id,
            name: pipeline.name,
            status: pipeline.status,
            enabled: pipeline.enabled,
            build_number: pipeline
                .build_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "--".to_string()),
            worker,
            updated: format_timestamp_local(pipeline.updated_at.as_ref()),
        }
    }
}
