//! Config file commands

use clap::ValueEnum;
use colored::Colorize;
use url::Url;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::MAX_PAGE_LIMIT;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Config file settings changed by `config set` and `config unset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Base URL of the pipeline service
    ServiceUrl,
    /// Bearer token sent with every request
    BearerToken,
    /// Pipeline used when --pipeline is not given
    DefaultPipeline,
    /// Output format used when --format is not given
    Format,
    /// Page size for run list requests
    PageSize,
}

impl ConfigKey {
    /// Name as written on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ServiceUrl => "service-url",
            ConfigKey::BearerToken => "bearer-token",
            ConfigKey::DefaultPipeline => "default-pipeline",
            ConfigKey::Format => "format",
            ConfigKey::PageSize => "page-size",
        }
    }

    /// Store `value` under this key, or clear the key when `None`.
    pub fn apply(&self, config: &mut Config, value: Option<&str>) -> Result<()> {
        match self {
            ConfigKey::ServiceUrl => {
                config.service_url = value.map(parse_service_url).transpose()?;
            }
            ConfigKey::BearerToken => config.bearer_token = value.map(str::to_string),
            ConfigKey::DefaultPipeline => config.default_pipeline_id = value.map(str::to_string),
            ConfigKey::Format => {
                config.preferences.format = value.map(parse_format).transpose()?;
            }
            ConfigKey::PageSize => {
                config.preferences.page_size = value.map(parse_page_size).transpose()?;
            }
        }
        Ok(())
    }
}

fn parse_service_url(value: &str) -> Result<String> {
    Url::parse(value).map_err(|e| {
        ConfigError::Invalid(format!("Invalid service URL '{}': {}", value, e))
    })?;
    Ok(value.to_string())
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    <OutputFormat as ValueEnum>::from_str(value, true).map_err(|_| {
        ConfigError::Invalid(format!(
            "Unknown output format '{}' (expected table or json)",
            value
        ))
        .into()
    })
}

fn parse_page_size(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|size| (1..=MAX_PAGE_LIMIT).contains(size))
        .ok_or_else(|| {
            ConfigError::Invalid(format!(
                "page size must be between 1 and {}, got '{}'",
                MAX_PAGE_LIMIT, value
            ))
            .into()
        })
}

/// Load the config file for editing; a missing file starts empty.
fn load_for_edit(opts: &GlobalOptions) -> Result<Config> {
    match Config::load_at(opts.config_ref()) {
        Ok(config) => Ok(config),
        Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

/// Run the config set command
pub fn set(opts: &GlobalOptions, key: ConfigKey, value: &str) -> Result<()> {
    let mut config = load_for_edit(opts)?;
    key.apply(&mut config, Some(value))?;
    config.save_at(opts.config_ref())?;

    let shown = match key {
        ConfigKey::BearerToken => "********",
        _ => value,
    };
    eprintln!("{} Set {} = {}", "✓".green(), key.as_str(), shown);
    Ok(())
}

/// Run the config unset command
pub fn unset(opts: &GlobalOptions, key: ConfigKey) -> Result<()> {
    let mut config = load_for_edit(opts)?;
    key.apply(&mut config, None)?;
    config.save_at(opts.config_ref())?;

    eprintln!("{} Unset {}", "✓".green(), key.as_str());
    Ok(())
}
