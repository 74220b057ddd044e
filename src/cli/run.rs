//! Pipeline run commands

use colored::Colorize;
use log::debug;

use crate::cli::{
    CommandContext, GlobalOptions, OutputFormat, PagerArgs, RunCreateArgs, RunFilterArgs,
};
use crate::client::models::{LogsCollection, PipelineRun, StepLog};
use crate::client::{
    CancelPipelineRunOptions, ListPipelineRunsOptions, PipelineRunApi, pipeline_runs_pager,
};
use crate::error::Result;
use crate::models::{LogDisplay, RunDisplay};
use crate::output::json::format_json;
use crate::output::{Formattable, print_single};

/// Run the run list command
///
/// Walks the pipeline runs collection page by page. Without `--max-pages`
/// every page is fetched.
pub async fn list(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    filters: &RunFilterArgs,
    pager: &PagerArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    let options = filters.apply(ListPipelineRunsOptions::new(&pipeline_id));
    let options = pager.apply(options, ctx.config.preferences.page_size);

    debug!("Listing runs for pipeline {} ({:?})", pipeline_id, options);

    let collected = collect_runs(ctx.client.as_ref(), options, pager.max_pages()).await?;

    debug!("Fetched {} runs", collected.runs.len());

    let display_runs: Vec<RunDisplay> =
        collected.runs.into_iter().map(RunDisplay::from).collect();
    display_runs.print(ctx.format)?;

    if let Some(pages) = collected.stopped_after {
        eprintln!(
            "{} Stopped after {} pages; more runs are available. Raise --max-pages to fetch more.",
            "→".cyan(),
            pages
        );
    }

    Ok(())
}

/// Runs gathered by [`collect_runs`]
#[derive(Debug)]
pub struct CollectedRuns {
    /// Runs in fetch order
    pub runs: Vec<PipelineRun>,
    /// Set to the page count when the page cap ended the walk with pages left
    pub stopped_after: Option<usize>,
}

/// Fetch runs through a pager, stopping after `max_pages` pages when set.
pub async fn collect_runs<C: PipelineRunApi + ?Sized>(
    client: &C,
    options: ListPipelineRunsOptions,
    max_pages: Option<usize>,
) -> Result<CollectedRuns> {
    let pager = pipeline_runs_pager(client, options)?;

    let Some(max_pages) = max_pages else {
        return Ok(CollectedRuns {
            runs: pager.get_all().await?,
            stopped_after: None,
        });
    };

    let mut pager = pager;
    let mut runs = Vec::new();
    while pager.has_next() && pager.pages_fetched() < max_pages {
        runs.extend(pager.get_next().await?);
    }

    Ok(CollectedRuns {
        runs,
        stopped_after: pager.has_next().then(|| pager.pages_fetched()),
    })
}

/// Run the run create command
pub async fn create(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    args: &RunCreateArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    debug!(
        "Starting run of pipeline {} from trigger {}",
        pipeline_id, args.trigger
    );
    let run = ctx
        .client
        .create_pipeline_run(&args.to_options(&pipeline_id))
        .await?;

    eprintln!("{} Started run {}", "✓".green(), run.id);
    print_single(&RunDisplay::from(run), ctx.format)
}

/// Run the run get command
pub async fn get(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    run_id: &str,
    includes: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    let run = ctx
        .client
        .get_pipeline_run(&pipeline_id, run_id, includes)
        .await?;

    print_single(&RunDisplay::from(run), ctx.format)
}

/// Run the run cancel command
pub async fn cancel(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    run_id: &str,
    force: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    let mut options = CancelPipelineRunOptions::new(&pipeline_id, run_id);
    if force {
        options = options.force(true);
    }

    let run = ctx.client.cancel_pipeline_run(&options).await?;
    print_single(&RunDisplay::from(run), ctx.format)
}

/// Run the run rerun command
pub async fn rerun(opts: &GlobalOptions, pipeline: Option<&str>, run_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    let run = ctx.client.rerun_pipeline_run(&pipeline_id, run_id).await?;
    print_single(&RunDisplay::from(run), ctx.format)
}

/// Run the run delete command
pub async fn delete(opts: &GlobalOptions, pipeline: Option<&str>, run_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    ctx.client.delete_pipeline_run(&pipeline_id, run_id).await?;

    eprintln!("{} Deleted run {}", "✓".green(), run_id);
    Ok(())
}

/// Run the run logs command
///
/// Lists the step logs of a run, or prints one step's log when `step` is set.
pub async fn logs(
    opts: &GlobalOptions,
    pipeline: Option<&str>,
    run_id: &str,
    step: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let pipeline_id = ctx.require_pipeline_id(pipeline)?;

    if let Some(log_id) = step {
        let log = ctx
            .client
            .get_pipeline_run_log_content(&pipeline_id, run_id, log_id)
            .await?;
        println!("{}", format_step_log(&log, ctx.format)?);
        return Ok(());
    }

    let LogsCollection { logs } = ctx
        .client
        .get_pipeline_run_logs(&pipeline_id, run_id)
        .await?;

    let display_logs: Vec<LogDisplay> = logs.into_iter().map(LogDisplay::from).collect();
    display_logs.print(ctx.format)?;

    Ok(())
}

/// Raw log text for tables, the wrapped record for JSON.
fn format_step_log(log: &StepLog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(log.data.trim_end().to_string()),
        OutputFormat::Json => Ok(format_json(log)?),
    }
}
