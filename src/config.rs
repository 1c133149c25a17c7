use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::fetchers::DEFAULT_USER_AGENT;

/// Home page configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HomeConfig {
    /// Endpoint that returns the full recipe list
    pub api_url: String,
    /// Request timeout in seconds. Unset means the request may wait forever.
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Optional TOML translation catalog
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// User agent sent with the recipe request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl HomeConfig {
    /// Build a configuration for an endpoint with every other value defaulted
    pub fn for_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: None,
            catalog: None,
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from `config.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_HOME__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_HOME__API_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config(Path::new("config"))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from `file` (extension optional, may be missing) and
/// environment variables
pub fn load_config(file: &Path) -> Result<HomeConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::from(file).required(false))
        // Use double underscore after the prefix: RECIPE_HOME__API_URL
        .add_source(
            Environment::with_prefix("RECIPE_HOME")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
