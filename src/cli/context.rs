//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and client initialization.

use std::sync::Arc;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::TektonPipelineClient;
use crate::config::{Config, ServiceProperties};
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Resolved configuration (file, external properties and flags merged)
    pub config: Config,
    /// API client (Arc-wrapped so fetchers can own a handle)
    pub client: Arc<TektonPipelineClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// This handles:
    /// - Loading the config file (a missing file is fine when the service
    ///   URL comes from elsewhere)
    /// - Overlaying external service properties
    /// - Applying the `--api-url` override
    /// - Creating the API client
    ///
    /// # Errors
    /// Returns error if config cannot be parsed or no service URL is known.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        let service_url = config.require_service_url()?;

        debug!("Using service URL {}", service_url);
        let client = TektonPipelineClient::new(service_url, config.bearer_token.clone())?;

        Ok(Self {
            client: Arc::new(client),
            format: output_format(opts, &config),
            config,
        })
    }

    /// Pipeline to operate on: `pipeline_override`, else the configured default.
    pub fn require_pipeline_id(&self, pipeline_override: Option<&str>) -> Result<String> {
        self.config.require_pipeline_id(pipeline_override)
    }
}

/// Merge the config file, external properties and CLI overrides.
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let props = ServiceProperties::load()?;

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound))
            if !props.is_empty() || opts.api_url_ref().is_some() =>
        {
            debug!("No config file; using external service properties");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    config.apply_service_properties(&props)?;

    if let Some(url) = opts.api_url_ref() {
        config.service_url = Some(url.to_string());
    }

    Ok(config)
}

/// `--format` wins over `preferences.format`; tables otherwise.
fn output_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    opts.format
        .or(config.preferences.format)
        .unwrap_or_default()
}
