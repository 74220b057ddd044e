//! Pipeline run display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{PipelineRun, PipelineRunLog};
use crate::output::formatters::{format_elapsed, format_timestamp_local};

/// Pipeline run display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RunDisplay {
    /// Run ID
    #[tabled(rename = "RUN ID")]
    pub id: String,

    /// Run status
    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Name of the trigger that started the run
    #[tabled(rename = "TRIGGER")]
    pub trigger: String,

    /// Event listener
    #[tabled(rename = "LISTENER")]
    pub listener: String,

    /// Creation time (local)
    #[tabled(rename = "CREATED")]
    pub created: String,

    /// Time from creation to last update, for finished runs
    #[tabled(rename = "DURATION")]
    pub duration: String,
}

impl From<PipelineRun> for RunDisplay {
    fn from(run: PipelineRun) -> Self {
        let trigger = run
            .trigger
            .as_ref()
            .and_then(|t| t.get("name"))
            .and_then(|name| name.as_str())
            .unwrap_or("--")
            .to_string();

        let duration = if run.status.is_terminal() {
            format_elapsed(run.created_at.as_ref(), run.updated_at.as_ref())
        } else {
            "--".to_string()
        };

        Self {
            status: run.status.to_string(),
            trigger,
            listener: run.listener_name,
            created: format_timestamp_local(run.created_at.as_ref()),
            duration,
            id: run.id,
        }
    }
}

/// Run step log display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct LogDisplay {
    /// Log ID
    #[tabled(rename = "LOG ID")]
    pub id: String,

    /// `<pod>/<container>` of the step
    #[tabled(rename = "STEP")]
    pub name: String,

    /// API URL of the log content
    #[tabled(rename = "HREF")]
    pub href: String,
}

impl From<PipelineRunLog> for LogDisplay {
    fn from(log: PipelineRunLog) -> Self {
        Self {
            id: log.id,
            name: log.name,
            href: log.href.unwrap_or_else(|| "--".to_string()),
        }
    }
}
