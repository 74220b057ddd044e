//! Read-only functional tests for tektonop
//!
//! These tests do not modify any data.

use predicates::prelude::*;
use tektonop::client::models::RunStatus;
use tektonop::client::{ListPipelineRunsOptions, PipelineApi};

use super::FunctionalTestContext;

// ============================================================================
// Status Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_shows_service_url() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("Service URL"));
}

// ============================================================================
// Pipeline
// ============================================================================

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_get_pipeline() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    let pipeline = ctx.client().get_pipeline(&ctx.pipeline_id).await.unwrap();
    assert_eq!(pipeline.id, ctx.pipeline_id);
}

// ============================================================================
// Pipeline Runs
// ============================================================================

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_run_pager_get_next_matches_get_all() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };
    let client = ctx.client();
    let options = ListPipelineRunsOptions::new(&ctx.pipeline_id)
        .limit(10)
        .status(RunStatus::Succeeded)
        .trigger_name("manual-trigger");

    let mut pager = client.pipeline_runs_pager(options.clone()).unwrap();
    let mut looped = Vec::new();
    while pager.has_next() {
        looped.extend(pager.get_next().await.unwrap());
    }

    let all = client
        .pipeline_runs_pager(options)
        .unwrap()
        .get_all()
        .await
        .unwrap();

    assert_eq!(all.len(), looped.len());
    eprintln!("Pager returned a total of {} run(s)", all.len());
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_run_pager_single_item_pages() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };
    let client = ctx.client();

    let mut pager = client
        .pipeline_runs_pager(ListPipelineRunsOptions::new(&ctx.pipeline_id).limit(1))
        .unwrap();
    while pager.has_next() && pager.pages_fetched() < 5 {
        let page = pager.get_next().await.unwrap();
        assert!(page.len() <= 1);
    }
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_run_list_json_format() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    let stdout = ctx.run_success(&[
        "run",
        "list",
        "--pipeline",
        &ctx.pipeline_id,
        "--max-pages",
        "2",
        "--format",
        "json",
    ]);
    let output: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(output["data"].is_array());
    assert!(output["meta"]["version"].is_string());
}

// ============================================================================
// Properties & Triggers
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_property_list() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    ctx.run(&["property", "list", "--pipeline", &ctx.pipeline_id])
        .success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_trigger_list() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    ctx.run(&["trigger", "list", "--pipeline", &ctx.pipeline_id])
        .success();
}
