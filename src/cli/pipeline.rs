//! Pipeline commands

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::PipelineApi;
use crate::error::Result;
use crate::models::PipelineDisplay;
use crate::output::print_single;

/// Run the pipeline get command
pub async fn get(opts: &GlobalOptions, pipeline: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    debug!("Fetching pipeline {}", pipeline_id);
    let pipeline = ctx.client.get_pipeline(&pipeline_id).await?;

    print_single(&PipelineDisplay::from(pipeline), ctx.format)
}
