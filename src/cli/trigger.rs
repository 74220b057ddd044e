//! Trigger commands

use crate::cli::handlers::run_list_command;
use crate::cli::{GlobalOptions, TriggerFilterArgs};
use crate::client::TriggerApi;
use crate::client::models::Trigger;
use crate::error::Result;
use crate::models::TriggerDisplay;

/// Run the trigger list command
pub async fn list(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    filters: &TriggerFilterArgs,
) -> Result<()> {
    run_list_command::<Trigger, TriggerDisplay, _, _>(
        opts,
        pipeline,
        "triggers",
        |client, pipeline_id| async move {
            client.list_triggers(&filters.to_options(&pipeline_id)).await
        },
    )
    .await
}
