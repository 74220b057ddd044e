//! Pipeline run models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Property, Worker};
use crate::error::{ApiError, Result};

/// Base used to resolve relative page links returned by the service.
const RELATIVE_LINK_BASE: &str = "http://localhost/";

/// Pipeline run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Waiting,
    Queued,
    Running,
    Cancelled,
    Cancelling,
    Failed,
    Error,
    Succeeded,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Wire name used in the `status` query filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Waiting => "waiting",
            RunStatus::Queued => "queued",
            RunStatus::Running => "running",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Cancelling => "cancelling",
            RunStatus::Failed => "failed",
            RunStatus::Error => "error",
            RunStatus::Succeeded => "succeeded",
            RunStatus::Unknown => "unknown",
        }
    }

    /// Whether the run has reached a final state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Cancelled | RunStatus::Failed | RunStatus::Error | RunStatus::Succeeded
        )
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the user who started a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// IBM Cloud IAM ID
    pub iam_id: String,

    /// User email address
    #[serde(default)]
    pub sub: String,
}

/// Single pipeline run record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Run ID
    pub id: String,

    /// Run status
    pub status: RunStatus,

    /// Pipeline ID
    #[serde(default)]
    pub pipeline_id: String,

    /// Event listener that received the triggering event
    #[serde(default)]
    pub listener_name: String,

    /// Definition used for this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<String>,

    /// User who started the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,

    /// Worker that executed the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<Worker>,

    /// Trigger snapshot at the time of the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<serde_json::Value>,

    /// Properties resolved for this run
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,

    /// Error details when the run failed to start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Console URL of the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_url: Option<String>,

    /// API URL of the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Link to a page of the pipeline runs collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunsPageLink {
    pub href: String,
}

/// One page of the pipeline runs collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRunsCollection {
    /// Runs on this page
    #[serde(default)]
    pub pipeline_runs: Vec<PipelineRun>,

    /// Requested page size
    #[serde(default)]
    pub limit: u32,

    /// Link to the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<RunsPageLink>,

    /// Link to the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<RunsPageLink>,

    /// Link to the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<RunsPageLink>,
}

impl PipelineRunsCollection {
    /// Extract the `start` cursor of the next page from the `next` link.
    ///
    /// Returns `Ok(None)` when there is no next page, or when the link carries
    /// no (or an empty) `start` parameter. A link that cannot be parsed as a
    /// URL is an invalid response.
    pub fn next_start(&self) -> Result<Option<String>> {
        let Some(next) = &self.next else {
            return Ok(None);
        };

        let url = match Url::parse(&next.href) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_LINK_BASE)
                .and_then(|base| base.join(&next.href))
                .map_err(|e| invalid_link(&next.href, e))?,
            Err(e) => return Err(invalid_link(&next.href, e)),
        };

        Ok(url
            .query_pairs()
            .find(|(key, _)| key == "start")
            .map(|(_, value)| value.into_owned())
            .filter(|start| !start.is_empty()))
    }
}

fn invalid_link(href: &str, err: url::ParseError) -> crate::error::Error {
    ApiError::InvalidResponse(format!("Invalid next page link '{}': {}", href, err)).into()
}

/// Reference to the log of one pipeline run step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRunLog {
    /// Log ID
    pub id: String,

    /// `<podName>/<containerName>` of the step
    pub name: String,

    /// API URL of the log content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Response of the run logs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsCollection {
    #[serde(default)]
    pub logs: Vec<PipelineRunLog>,
}

/// Log content of one pipeline run step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepLog {
    /// Log ID
    pub id: String,

    /// Raw log text
    #[serde(default)]
    pub data: String,
}
