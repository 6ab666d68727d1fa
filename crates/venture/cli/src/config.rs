//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use venture_analytics::Horizon;
use venture_client::advisor::DEFAULT_RISK_MODEL;
use venture_client::api::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Evaluation service base URL
    pub api_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,

    /// Default projection horizon
    pub horizon: Option<Horizon>,

    /// Ask the risk advisor for risks on every evaluation
    pub generate_risks: Option<bool>,

    /// Chat model used by the risk advisor
    pub risk_model: Option<String>,

    /// Chat completion endpoint or API base for the risk advisor
    pub risk_endpoint: Option<String>,
}

impl CliConfig {
    /// Load configuration from file. A missing file gives the defaults.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("venture").join("config.toml"))
    }

    /// Merge with command-line values; flags win over the file.
    pub fn resolve(&self, api_url: Option<&str>) -> Settings {
        Settings {
            api_url: api_url
                .map(str::to_string)
                .or_else(|| self.api_url.clone())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            horizon: self.horizon.unwrap_or_default(),
            generate_risks: self.generate_risks.unwrap_or(false),
            risk_model: self
                .risk_model
                .clone()
                .unwrap_or_else(|| DEFAULT_RISK_MODEL.to_string()),
            risk_endpoint: self.risk_endpoint.clone(),
        }
    }
}

/// Effective settings after merging flags, file and defaults
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub api_url: String,
    #[serde(serialize_with = "as_seconds")]
    pub timeout: Duration,
    pub horizon: Horizon,
    pub generate_risks: bool,
    pub risk_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_endpoint: Option<String>,
}

fn as_seconds<S: serde::Serializer>(timeout: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(timeout.as_secs())
}
