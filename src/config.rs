use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::model::Mode;

/// Settings supplied by the bootstrap layer
#[derive(Debug, Deserialize, Clone)]
pub struct ControllerConfig {
    /// Base URL of the analysis backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path of the cook-analysis endpoint
    #[serde(default = "default_cook_path")]
    pub cook_path: String,
    /// Path of the calorie calculation endpoint
    #[serde(default = "default_calculate_path")]
    pub calculate_path: String,
    /// Optional transport timeout in seconds. Unset means requests may hang.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Initial value of the debug-visibility flag
    #[serde(default = "default_debug_enabled")]
    pub debug_enabled: bool,
    /// User agent sent with outbound requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            cook_path: default_cook_path(),
            calculate_path: default_calculate_path(),
            request_timeout_secs: None,
            debug_enabled: default_debug_enabled(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_cook_path() -> String {
    "/api/cook".to_string()
}

fn default_calculate_path() -> String {
    "/api/calculate".to_string()
}

fn default_debug_enabled() -> bool {
    true
}

fn default_user_agent() -> String {
    format!("recipe-calories/{}", env!("CARGO_PKG_VERSION"))
}

impl ControllerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CALORIES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CALORIES__API_BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Config pointing at a specific backend, everything else default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the endpoint serving `mode`
    pub fn endpoint_url(&self, mode: Mode) -> String {
        let path = match mode {
            Mode::Cook => &self.cook_path,
            Mode::Nutrition => &self.calculate_path,
        };
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// See [`ControllerConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ControllerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_CALORIES__API_BASE_URL
        .add_source(
            Environment::with_prefix("RECIPE_CALORIES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
