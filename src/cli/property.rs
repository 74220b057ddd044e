//! Environment property commands

use crate::cli::handlers::run_list_command;
use crate::cli::{GlobalOptions, PropertyFilterArgs};
use crate::client::PropertyApi;
use crate::client::models::Property;
use crate::error::Result;
use crate::models::PropertyDisplay;

/// Run the property list command
pub async fn list(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    filters: &PropertyFilterArgs,
) -> Result<()> {
    run_list_command::<Property, PropertyDisplay, _, _>(
        opts,
        pipeline,
        "properties",
        |client, pipeline_id| async move {
            client
                .list_properties(&filters.to_options(&pipeline_id))
                .await
        },
    )
    .await
}
