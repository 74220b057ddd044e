//! Error scenario functional tests for tektonop

use predicates::prelude::*;
use tektonop::client::{ListPipelineRunsOptions, PipelineRunApi};
use tektonop::{ApiError, ConfigError, Error};

use super::FunctionalTestContext;

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_pager_rejects_preset_cursor() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    let client = ctx.client();
    let options = ListPipelineRunsOptions::new(&ctx.pipeline_id).start("testString");
    let result = client.pipeline_runs_pager(options);

    assert!(matches!(result, Err(Error::Config(ConfigError::Invalid(_)))));
}

#[tokio::test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
async fn test_nonexistent_run_returns_not_found() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    let result = ctx
        .client()
        .get_pipeline_run(&ctx.pipeline_id, "00000000-0000-0000-0000-000000000000", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::Api(ApiError::NotFound(_) | ApiError::BadRequest(_)))
    ));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_pipeline_cli_error() {
    let Some(ctx) = FunctionalTestContext::load() else {
        return;
    };

    ctx.run(&["pipeline", "get", "tektonop-functest-missing-pipeline"])
        .failure()
        .stderr(
            predicate::str::contains("not found")
                .or(predicate::str::contains("Bad request"))
                .or(predicate::str::contains("Access denied")),
        );
}
