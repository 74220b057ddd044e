//! Configuration management for tektonop
//!
//! Two layers feed the client settings:
//! - the YAML config file (`~/.tektonop/config.yaml` by default)
//! - external service properties, read from the credentials file named by
//!   `IBM_CREDENTIALS_FILE` and from `CD_TEKTON_PIPELINE_*` environment
//!   variables
//!
//! External properties win over the config file.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{ConfigError, Result};

/// Prefix of the external service properties
pub const SERVICE_NAME: &str = "CD_TEKTON_PIPELINE";

/// Environment variable naming the external credentials file
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Tekton pipeline service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,

    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    /// Pipeline used when a command is not given one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_pipeline_id: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Page size for list requests; unset leaves it to the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".tektonop").join("config.yaml"))
    }

    /// Resolve an optional path override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or the default path when `None`
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`, or the default path when `None`
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Holds a bearer token; owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Overlay external service properties onto this configuration.
    ///
    /// `bearerToken` auth without a token from either layer is rejected.
    pub fn apply_service_properties(&mut self, props: &ServiceProperties) -> Result<()> {
        if let Some(ref url) = props.url {
            self.service_url = Some(url.clone());
        }

        if let Some(ref token) = props.bearer_token {
            self.bearer_token = Some(token.clone());
        }

        match props.auth_type {
            Some(AuthType::NoAuth) => self.bearer_token = None,
            Some(AuthType::BearerToken) if self.bearer_token.is_none() => {
                return Err(ConfigError::Invalid(format!(
                    "bearerToken auth requires {}_BEARER_TOKEN",
                    SERVICE_NAME
                ))
                .into());
            }
            Some(AuthType::BearerToken) | None => {}
        }

        Ok(())
    }

    /// The configured service URL, required for every API command.
    pub fn require_service_url(&self) -> Result<&str> {
        self.service_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingServiceUrl.into())
    }

    /// Pick the pipeline to operate on: the override, else the default.
    pub fn require_pipeline_id(&self, pipeline_override: Option<&str>) -> Result<String> {
        pipeline_override
            .or(self.default_pipeline_id.as_deref())
            .filter(|id| !id.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ConfigError::Invalid(
                    "No pipeline ID given. Pass --pipeline or set default_pipeline_id.".to_string(),
                )
                .into()
            })
    }
}

/// How the client authenticates to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    /// Send no credentials
    NoAuth,
    /// Send `Authorization: Bearer <token>`
    BearerToken,
}

impl std::str::FromStr for AuthType {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noauth" => Ok(AuthType::NoAuth),
            "bearertoken" => Ok(AuthType::BearerToken),
            other => Err(ConfigError::Invalid(format!(
                "Unsupported auth type '{}' (expected noauth or bearerToken)",
                other
            ))),
        }
    }
}

/// Service settings supplied from outside the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceProperties {
    pub url: Option<String>,
    pub auth_type: Option<AuthType>,
    pub bearer_token: Option<String>,
}

impl ServiceProperties {
    /// Read the credentials file (if `IBM_CREDENTIALS_FILE` is set), then the
    /// process environment. Environment values override file values.
    pub fn load() -> Result<Self> {
        let mut props = match std::env::var_os(CREDENTIALS_FILE_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        props.merge(Self::from_vars(std::env::vars())?);
        Ok(props)
    }

    /// Parse a dotenv-format credentials file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading service properties from {}", path.display());
        let vars = dotenvy::from_path_iter(path)
            .map_err(ConfigError::from)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(ConfigError::from)?;
        Self::from_vars(vars)
    }

    /// Pick the `CD_TEKTON_PIPELINE_*` entries out of key/value pairs.
    ///
    /// Unrelated keys and empty values are ignored.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut props = Self::default();
        let prefix = format!("{}_", SERVICE_NAME);

        for (key, value) in vars {
            let Some(prop) = key.strip_prefix(&prefix) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            match prop {
                "URL" => props.url = Some(value),
                "AUTH_TYPE" => props.auth_type = Some(value.parse()?),
                "BEARER_TOKEN" => props.bearer_token = Some(value),
                _ => {}
            }
        }

        Ok(props)
    }

    /// Whether no property was supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Take every property `other` sets.
    pub fn merge(&mut self, other: Self) {
        if other.url.is_some() {
            self.url = other.url;
        }
        if other.auth_type.is_some() {
            self.auth_type = other.auth_type;
        }
        if other.bearer_token.is_some() {
            self.bearer_token = other.bearer_token;
        }
    }
}
