//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Resolve the pipeline ID
//! 3. Fetch data
//! 4. Convert to display type
//! 5. Print output

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::TektonPipelineClient;
use crate::error::Result;
use crate::output::Formattable;

/// Run a standard list command with the common fetch → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Property`, `Trigger`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Trigger, TriggerDisplay, _, _>(
///     opts,
///     pipeline,
///     "triggers",
///     |client, pipeline_id| async move {
///         client.list_triggers(&ListTriggersOptions::new(pipeline_id)).await
///     },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<TektonPipelineClient>, String) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    debug!("Fetching {} for pipeline {}", resource_name, pipeline_id);

    let items = fetcher(ctx.client.clone(), pipeline_id).await?;

    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}
