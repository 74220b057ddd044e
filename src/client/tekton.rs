//! Tekton pipeline API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::api::{PipelineApi, PipelineRunApi, PropertyApi, TriggerApi};
use super::models::{
    LogsCollection, PipelineRun, PipelineRunsCollection, PropertiesCollection, Property,
    StepLog, TektonPipeline, Trigger, TriggersCollection,
};
use super::options::{
    CancelPipelineRunOptions, CreatePipelineRunOptions, ListPipelineRunsOptions,
    ListPropertiesOptions, ListTriggersOptions,
};
use super::pager::{PipelineRunsPager, pipeline_runs_pager};
use crate::error::{ApiError, ConfigError, Result};

/// Default service URL (us-south region)
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.devops.cloud.ibm.com/pipeline/v2";

/// Request timeout applied to every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Tekton pipeline API client
///
/// Built once from configuration and shared by reference: the client holds
/// no per-request state, so any number of sequential or concurrent pagers
/// can borrow it.
pub struct TektonPipelineClient {
    http: HttpClient,
    base_url: Url,
    bearer_token: Option<String>,
}

impl TektonPipelineClient {
    /// Create a new client for the service at `base_url`.
    ///
    /// `bearer_token` is sent as-is in the `Authorization` header when set.
    pub fn new(base_url: &str, bearer_token: Option<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::Invalid(format!("Invalid service URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!(
                "Service URL '{}' cannot be used as a base URL",
                base_url
            ))
            .into());
        }

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("tektonop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            bearer_token,
        })
    }

    /// The service URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Create a pager over the pipeline runs selected by `options`.
    pub fn pipeline_runs_pager(
        &self,
        options: ListPipelineRunsOptions,
    ) -> Result<PipelineRunsPager<'_, Self>> {
        pipeline_runs_pager(self, options)
    }

    /// Build an endpoint URL by appending path segments to the service URL.
    ///
    /// Segments are percent-encoded individually.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match self.bearer_token {
            Some(ref token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode a JSON response body.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Send a request whose successful response has no body.
    async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await?;
        Ok(())
    }

    /// Send a request and map non-success statuses to API errors.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound(or_default(body, "Resource not found")),
            StatusCode::CONFLICT => ApiError::Conflict(or_default(body, "Conflict")),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(or_default(body, "Bad request"))
            }
            status if status.is_server_error() => {
                ApiError::ServerError(or_default(body, &format!("Server error: {}", status)))
            }
            status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
        };
        Err(err.into())
    }
}

fn or_default(body: String, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

#[derive(Serialize)]
struct CancelRunBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    force: Option<bool>,
}

#[async_trait]
impl PipelineApi for TektonPipelineClient {
    async fn get_pipeline(&self, pipeline_id: &str) -> Result<TektonPipeline> {
        let url = self.endpoint(&["tekton_pipelines", pipeline_id]);
        self.send_json(self.request(Method::GET, url)).await
    }

    async fn delete_pipeline(&self, pipeline_id: &str) -> Result<()> {
        let url = self.endpoint(&["tekton_pipelines", pipeline_id]);
        self.send_empty(self.request(Method::DELETE, url)).await
    }
}

#[async_trait]
impl PipelineRunApi for TektonPipelineClient {
    async fn list_pipeline_runs(
        &self,
        options: &ListPipelineRunsOptions,
    ) -> Result<PipelineRunsCollection> {
        let url = self.endpoint(&["tekton_pipelines", &options.pipeline_id, "pipeline_runs"]);
        let builder = self
            .request(Method::GET, url)
            .query(&options.to_query_params());
        self.send_json(builder).await
    }

    async fn create_pipeline_run(&self, options: &CreatePipelineRunOptions) -> Result<PipelineRun> {
        options.validate()?;
        let url = self.endpoint(&["tekton_pipelines", &options.pipeline_id, "pipeline_runs"]);
        self.send_json(self.request(Method::POST, url).json(options))
            .await
    }

    async fn get_pipeline_run(
        &self,
        pipeline_id: &str,
        run_id: &str,
        includes: Option<&str>,
    ) -> Result<PipelineRun> {
        let url = self.endpoint(&["tekton_pipelines", pipeline_id, "pipeline_runs", run_id]);
        let mut builder = self.request(Method::GET, url);
        if let Some(includes) = includes {
            builder = builder.query(&[("includes", includes)]);
        }
        self.send_json(builder).await
    }

    async fn cancel_pipeline_run(&self, options: &CancelPipelineRunOptions) -> Result<PipelineRun> {
        let url = self.endpoint(&[
            "tekton_pipelines",
            &options.pipeline_id,
            "pipeline_runs",
            &options.run_id,
            "cancel",
        ]);
        let body = CancelRunBody {
            force: options.force,
        };
        self.send_json(self.request(Method::POST, url).json(&body))
            .await
    }

    async fn rerun_pipeline_run(&self, pipeline_id: &str, run_id: &str) -> Result<PipelineRun> {
        let url = self.endpoint(&[
            "tekton_pipelines",
            pipeline_id,
            "pipeline_runs",
            run_id,
            "rerun",
        ]);
        self.send_json(self.request(Method::POST, url)).await
    }

    async fn delete_pipeline_run(&self, pipeline_id: &str, run_id: &str) -> Result<()> {
        let url = self.endpoint(&["tekton_pipelines", pipeline_id, "pipeline_runs", run_id]);
        self.send_empty(self.request(Method::DELETE, url)).await
    }

    async fn get_pipeline_run_logs(
        &self,
        pipeline_id: &str,
        run_id: &str,
    ) -> Result<LogsCollection> {
        let url = self.endpoint(&[
            "tekton_pipelines",
            pipeline_id,
            "pipeline_runs",
            run_id,
            "logs",
        ]);
        self.send_json(self.request(Method::GET, url)).await
    }

    async fn get_pipeline_run_log_content(
        &self,
        pipeline_id: &str,
        run_id: &str,
        log_id: &str,
    ) -> Result<StepLog> {
        let url = self.endpoint(&[
            "tekton_pipelines",
            pipeline_id,
            "pipeline_runs",
            run_id,
            "logs",
            log_id,
        ]);
        self.send_json(self.request(Method::GET, url)).await
    }
}

#[async_trait]
impl PropertyApi for TektonPipelineClient {
    async fn list_properties(&self, options: &ListPropertiesOptions) -> Result<Vec<Property>> {
        let url = self.endpoint(&["tekton_pipelines", &options.pipeline_id, "properties"]);
        let builder = self
            .request(Method::GET, url)
            .query(&options.to_query_params());
        let collection: PropertiesCollection = self.send_json(builder).await?;
        Ok(collection.properties)
    }
}

#[async_trait]
impl TriggerApi for TektonPipelineClient {
    async fn list_triggers(&self, options: &ListTriggersOptions) -> Result<Vec<Trigger>> {
        let url = self.endpoint(&["tekton_pipelines", &options.pipeline_id, "triggers"]);
        let builder = self
            .request(Method::GET, url)
            .query(&options.to_query_params());
        let collection: TriggersCollection = self.send_json(builder).await?;
        Ok(collection.triggers)
    }
}
