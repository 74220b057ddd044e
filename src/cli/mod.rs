//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod config;
pub mod context;
pub mod handlers;
pub mod pipeline;
pub mod property;
pub mod run;
pub mod status;
pub mod trigger;

pub use args::{
    GlobalOptions, OutputFormat, PagerArgs, PropertyFilterArgs, RunCreateArgs, RunFilterArgs,
    TriggerFilterArgs,
};
pub use context::CommandContext;

/// tektonop - command-line companion for Tekton delivery pipelines
#[derive(Parser, Debug)]
#[command(name = "tektonop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json) [default: preferences.format, else table]
    #[arg(long, global = true, env = "TEKTONOP_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "TEKTONOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the pipeline service URL
    #[arg(long, global = true, env = "TEKTONOP_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TEKTONOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Change settings in the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Inspect and manage pipelines
    #[command(subcommand)]
    Pipeline(PipelineCommands),

    /// List and manage pipeline runs
    #[command(subcommand)]
    Run(RunCommands),

    /// List pipeline environment properties
    #[command(subcommand)]
    Property(PropertyCommands),

    /// List pipeline triggers
    #[command(subcommand)]
    Trigger(TriggerCommands),
}

/// Config file subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a config file value
    Set {
        /// Setting to change
        #[arg(value_enum)]
        key: config::ConfigKey,

        /// New value
        value: String,
    },

    /// Remove a config file value
    Unset {
        /// Setting to remove
        #[arg(value_enum)]
        key: config::ConfigKey,
    },
}

/// Pipeline subcommands
#[derive(Subcommand, Debug)]
pub enum PipelineCommands {
    /// Show a pipeline
    Get {
        /// Pipeline ID (defaults to default_pipeline_id)
        pipeline_id: Option<String>,
    },
}

/// Pipeline run subcommands
#[derive(Subcommand, Debug)]
pub enum RunCommands {
    /// List runs of a pipeline, newest first
    List {
        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,

        #[command(flatten)]
        filters: RunFilterArgs,

        #[command(flatten)]
        pager: PagerArgs,
    },

    /// Start a new run from a trigger
    Create {
        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,

        #[command(flatten)]
        args: RunCreateArgs,
    },

    /// Show a single run
    Get {
        /// Run ID
        run_id: String,

        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,

        /// Include extra details (e.g. definitions)
        #[arg(long)]
        includes: Option<String>,
    },

    /// Cancel a running run
    Cancel {
        /// Run ID
        run_id: String,

        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,

        /// Cancel without waiting for running tasks to finish
        #[arg(long)]
        force: bool,
    },

    /// Start a new run with the same inputs as an existing run
    Rerun {
        /// Run ID
        run_id: String,

        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,
    },

    /// Delete a run
    Delete {
        /// Run ID
        run_id: String,

        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,
    },

    /// List the step logs of a run, or print one step's log
    Logs {
        /// Run ID
        run_id: String,

        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,

        /// Print the content of this log ID instead of listing logs
        #[arg(long)]
        step: Option<String>,
    },
}

/// Property subcommands
#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// List environment properties of a pipeline
    List {
        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,

        #[command(flatten)]
        filters: PropertyFilterArgs,
    },
}

/// Trigger subcommands
#[derive(Subcommand, Debug)]
pub enum TriggerCommands {
    /// List triggers of a pipeline
    List {
        /// Pipeline ID (defaults to default_pipeline_id)
        #[arg(long, short = 'p')]
        pipeline: Option<String>,

        #[command(flatten)]
        filters: TriggerFilterArgs,
    },
}
